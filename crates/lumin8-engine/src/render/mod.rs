//! GPU rendering subsystem.
//!
//! Renderers issue GPU commands via wgpu and are responsible for their own
//! resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in world tile units (bottom-left origin, +Y up).
//! - The vertex shader converts world coordinates to NDC; [`transform`]
//!   holds the CPU-side mirror of that mapping.

mod ctx;
pub mod grid;
pub mod transform;

pub use ctx::{RenderCtx, RenderTarget};
