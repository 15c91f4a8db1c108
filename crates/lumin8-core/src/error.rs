use thiserror::Error;

/// Errors surfaced while loading or running a CHIP-8 program.
///
/// A failing [`step`](crate::Chip8::step) has no effect beyond the fetch
/// advancing the program counter, so callers can log, pause, and inspect
/// rather than abort.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    /// ROM image does not fit between the load base (0x200) and end of RAM.
    #[error("ROM is {len} bytes; at most {max} fit in RAM")]
    RomTooLarge { len: usize, max: usize },

    /// Fetched a word no CHIP-8 instruction matches.
    #[error("unknown opcode {opcode:#06X} at {pc:#05X}")]
    UnknownOpcode { opcode: u16, pc: u16 },

    /// 2NNN with all sixteen stack slots already in use.
    #[error("call stack overflow at {pc:#05X}")]
    StackOverflow { pc: u16 },

    /// 00EE with no call frame to return to.
    #[error("return with empty call stack at {pc:#05X}")]
    StackUnderflow { pc: u16 },
}
