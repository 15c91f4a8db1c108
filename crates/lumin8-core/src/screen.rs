/// The 64×32 one-bit CHIP-8 framebuffer.
///
/// Row 0 is the top scanline. Sprites are XORed in: drawing over a lit pixel
/// erases it, and the erasure is reported back so DXYN can set the collision
/// flag. Coordinates wrap modulo the screen extent on both axes.
pub struct Screen {
    // Row-major: pixels[y][x].
    pixels: [[bool; Screen::WIDTH]; Screen::HEIGHT],
}

impl Screen {
    /// Horizontal extent in pixels.
    pub const WIDTH: usize = 64;

    /// Vertical extent in pixels.
    pub const HEIGHT: usize = 32;

    pub fn new() -> Self {
        Self {
            pixels: [[false; Self::WIDTH]; Self::HEIGHT],
        }
    }

    /// Turns every pixel off (opcode 00E0).
    pub fn clear(&mut self) {
        self.pixels = [[false; Self::WIDTH]; Self::HEIGHT];
    }

    /// Returns whether the pixel at `(x, y)` is lit.
    ///
    /// `x` and `y` must be in range; the machine only ever stores wrapped
    /// coordinates.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    /// XOR-draws a sprite whose rows are the bytes of `rows`, MSB leftmost,
    /// starting at `(x, y)` and wrapping per pixel on both axes.
    ///
    /// Returns true iff any lit pixel was turned off anywhere in the sprite.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let mut erased = false;

        for (row, byte) in rows.iter().enumerate() {
            let py = (y as usize + row) % Self::HEIGHT;

            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }

                let px = (x as usize + bit) % Self::WIDTH;
                let was_lit = self.pixels[py][px];

                self.pixels[py][px] = !was_lit;
                erased |= was_lit;
            }
        }

        erased
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        let s = Screen::new();
        assert!(!s.pixel(0, 0));
        assert!(!s.pixel(Screen::WIDTH - 1, Screen::HEIGHT - 1));
    }

    #[test]
    fn draws_byte_msb_leftmost() {
        let mut s = Screen::new();
        let erased = s.draw_sprite(0, 0, &[0b1010_0001]);

        assert!(!erased);
        assert!(s.pixel(0, 0));
        assert!(!s.pixel(1, 0));
        assert!(s.pixel(2, 0));
        assert!(s.pixel(7, 0));
        assert!(!s.pixel(8, 0));
    }

    #[test]
    fn redraw_erases_and_reports_collision() {
        let mut s = Screen::new();
        s.draw_sprite(4, 2, &[0xFF]);

        let erased = s.draw_sprite(4, 2, &[0xFF]);
        assert!(erased);
        for x in 4..12 {
            assert!(!s.pixel(x, 2));
        }
    }

    #[test]
    fn collision_accumulates_across_rows() {
        let mut s = Screen::new();
        s.draw_sprite(0, 0, &[0x80, 0x00]);

        // Row 0 collides, row 1 does not; the flag must survive row 1.
        let erased = s.draw_sprite(0, 0, &[0x80, 0x80]);
        assert!(erased);
        assert!(!s.pixel(0, 0));
        assert!(s.pixel(0, 1));
    }

    #[test]
    fn wraps_horizontally_per_pixel() {
        let mut s = Screen::new();
        s.draw_sprite(62, 0, &[0b1111_0000]);

        assert!(s.pixel(62, 0));
        assert!(s.pixel(63, 0));
        assert!(s.pixel(0, 0));
        assert!(s.pixel(1, 0));
        assert!(!s.pixel(2, 0));
    }

    #[test]
    fn wraps_vertically_per_pixel() {
        let mut s = Screen::new();
        s.draw_sprite(0, 31, &[0x80, 0x80]);

        assert!(s.pixel(0, 31));
        assert!(s.pixel(0, 0));
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut s = Screen::new();
        s.draw_sprite(10, 10, &[0xFF, 0xFF]);

        s.clear();
        for y in 0..Screen::HEIGHT {
            for x in 0..Screen::WIDTH {
                assert!(!s.pixel(x, y));
            }
        }
    }
}
