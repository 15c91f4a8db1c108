//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window; call `tick()` once per presented frame
//! - one `FixedStep` per fixed-rate subsystem (e.g. 60 Hz timers); feed it
//!   each frame's delta and run one update per step it returns

mod frame_clock;
mod step;

pub use frame_clock::{FrameClock, FrameTime};
pub use step::FixedStep;
