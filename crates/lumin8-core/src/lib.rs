//! Interpreter core for the **CHIP-8** virtual machine.
//!
//! This crate carries no window, GPU, or timing code so it can be embedded
//! in any front end, or driven headlessly from tests. The host owns the
//! clock: it calls [`Chip8::step`] for each instruction, ticks the timers
//! at 60 Hz, feeds the keypad, and reads the screen back out to present it.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`chip8`] | `Chip8` machine: RAM, registers, stack, timers |
//! | [`error`] | `Chip8Error` |
//! | [`keypad`] | `Keypad`, 16 keys plus the wait-for-release latch |
//! | [`opcode`] | `Opcode` word and its operand accessors |
//! | [`screen`] | `Screen`, the 64×32 monochrome framebuffer |
//!
//! # Quick start
//!
//! ```rust
//! use lumin8_core::Chip8;
//!
//! // CLS; I = 0 (digit-0 sprite); V0 = 0; V1 = 0; DRW V0,V1,5.
//! let rom = [0x00, 0xE0, 0xA0, 0x00, 0x60, 0x00, 0x61, 0x00, 0xD0, 0x15];
//!
//! let mut vm = Chip8::new();
//! vm.load_rom(&rom).unwrap();
//! for _ in 0..5 {
//!     vm.step().unwrap();
//! }
//! assert!(vm.screen().pixel(0, 0));
//! ```

pub mod chip8;
pub mod error;
pub mod keypad;
pub mod opcode;
pub mod screen;

pub use chip8::Chip8;
pub use error::Chip8Error;
pub use keypad::Keypad;
pub use opcode::Opcode;
pub use screen::Screen;
