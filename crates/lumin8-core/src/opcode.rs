use std::fmt;

/// A raw 16-bit CHIP-8 instruction word.
///
/// CHIP-8 encodes operands at fixed nibble positions; the accessors are named
/// after the conventional placeholders used in instruction listings
/// (`X`, `Y`, `N`, `NN`, `NNN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Splits the word into its four nibbles, high to low.
    #[inline]
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (
            (self.0 >> 12) as u8,
            (self.0 >> 8 & 0xF) as u8,
            (self.0 >> 4 & 0xF) as u8,
            (self.0 & 0xF) as u8,
        )
    }

    /// Register index in the second nibble (`_X__`).
    #[inline]
    pub fn x(self) -> usize {
        (self.0 >> 8 & 0xF) as usize
    }

    /// Register index in the third nibble (`__Y_`).
    #[inline]
    pub fn y(self) -> usize {
        (self.0 >> 4 & 0xF) as usize
    }

    /// Low nibble (`___N`), the sprite height in DXYN.
    #[inline]
    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// Low byte (`__NN`), an immediate operand.
    #[inline]
    pub fn nn(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Low twelve bits (`_NNN`), an address.
    #[inline]
    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
