/// A single acquired frame.
///
/// Holding the surface texture blocks acquisition of subsequent frames, so
/// the frame must be submitted (or dropped) promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
