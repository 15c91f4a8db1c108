//! Lumin8 engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the emulator
//! front end: window/event loop, wgpu device and surface, frame timing, and
//! the instanced tile-grid renderer.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
