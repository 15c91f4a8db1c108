/// State of the 16-key CHIP-8 keypad.
///
/// Keys are identified by their nibble value (0x0..=0xF); values above 0xF
/// are masked. FX0A's wait-for-key is modeled as an explicit latch:
/// [`await_release`](Keypad::await_release) arms it, the next key release is
/// captured, and [`take_released`](Keypad::take_released) hands it over
/// exactly once. Latching on release rather than press means a key held
/// since before the wait began does not satisfy it.
#[derive(Debug, Default)]
pub struct Keypad {
    down: [bool; 16],
    waiting: bool,
    released: Option<u8>,
}

impl Keypad {
    pub fn press(&mut self, key: u8) {
        self.down[(key & 0xF) as usize] = true;
    }

    /// Marks `key` as up; if a wait is armed, latches the release.
    pub fn release(&mut self, key: u8) {
        let key = key & 0xF;
        self.down[key as usize] = false;

        if self.waiting {
            self.waiting = false;
            self.released = Some(key);
        }
    }

    pub fn is_down(&self, key: u8) -> bool {
        self.down[(key & 0xF) as usize]
    }

    /// Arms the wait-for-release latch. A release already latched but not
    /// yet taken is left in place.
    pub fn await_release(&mut self) {
        if self.released.is_none() {
            self.waiting = true;
        }
    }

    /// Takes the latched key, if a release arrived since the wait was armed.
    pub fn take_released(&mut self) -> Option<u8> {
        self.released.take()
    }

    /// Drops all held keys and any pending wait.
    ///
    /// Called on focus loss so keys released while another window was
    /// focused do not stay stuck down.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
