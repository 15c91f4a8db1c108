use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::transform;
use crate::render::{RenderCtx, RenderTarget};

/// How the vertex stage maps world coordinates to clip space.
///
/// Both modes produce identical output for the default grid: the bound
/// projection matrix is [`transform::ortho_projection`], which reproduces
/// the baked extent mapping exactly. `Matrix` exists so the mapping can be
/// swapped at one place instead of being scattered through shader code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Projection {
    /// Bake the fixed 64×32 grid extent into the vertex stage (default).
    #[default]
    FixedExtent,
    /// Transform world coordinates by the bound projection matrix.
    Matrix,
}

impl Projection {
    fn entry_point(self) -> &'static str {
        match self {
            Projection::FixedExtent => "vs_main",
            Projection::Matrix => "vs_projected",
        }
    }
}

/// One tile to draw: grid origin in world units plus its illumination.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct TileInstance {
    pub origin: [f32; 2],
    pub lit: f32,
}

impl TileInstance {
    pub fn new(origin: [f32; 2], lit: bool) -> Self {
        Self {
            origin,
            lit: if lit { 1.0 } else { 0.0 },
        }
    }

    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32    // lit
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit-quad corner shared by every instance.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TileVertex {
    corner: [f32; 2], // 0..1
}

impl TileVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const TILE_VERTICES: [TileVertex; 4] = [
    TileVertex { corner: [0.0, 0.0] },
    TileVertex { corner: [1.0, 0.0] },
    TileVertex { corner: [1.0, 1.0] },
    TileVertex { corner: [0.0, 1.0] },
];

const TILE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GridUniform {
    projection: [[f32; 4]; 4],
}

/// Tile-grid renderer: one instanced unit quad per tile, binary shading.
///
/// Tiles are opaque, so output replaces the destination without blending.
/// GPU resources are created lazily on first use and recreated if the
/// surface format changes.
pub struct GridRenderer {
    projection: Projection,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    projection_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::with_projection(Projection::default())
    }

    pub fn with_projection(projection: Projection) -> Self {
        Self {
            projection,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            projection_ubo: None,
            quad_vbo: None,
            quad_ibo: None,
            instance_vbo: None,
            instance_capacity: 0,
        }
    }

    /// Draws `tiles` into `target` over whatever the pass already holds.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        tiles: &[TileInstance],
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        if tiles.is_empty() {
            return;
        }

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.write_projection_uniform(ctx);
        self.ensure_instance_capacity(ctx, tiles.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(instance_vbo, 0, bytemuck::cast_slice(tiles));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumin8 grid pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..TILE_INDICES.len() as u32, 0, 0..tiles.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/grid.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumin8 grid shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("lumin8 grid bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(projection_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("lumin8 grid pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    // Newer wgpu uses immediate constants; keep disabled for now.
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("lumin8 grid pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(self.projection.entry_point()),
                    compilation_options: Default::default(),
                    buffers: &[TileVertex::layout(), TileInstance::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.projection_ubo = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumin8 grid quad vbo"),
            contents: bytemuck::cast_slice(&TILE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumin8 grid quad ibo"),
            contents: bytemuck::cast_slice(&TILE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.projection_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let projection_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumin8 grid projection ubo"),
            size: std::mem::size_of::<GridUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumin8 grid bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_ubo.as_entire_binding(),
            }],
        });

        self.projection_ubo = Some(projection_ubo);
        self.bind_group = Some(bind_group);
    }

    /// Uploads the grid's orthographic projection.
    ///
    /// The matrix is written in both modes so the binding always holds
    /// defined data; in `FixedExtent` mode the shader simply ignores it.
    fn write_projection_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.projection_ubo.as_ref() else { return };
        let u = GridUniform {
            projection: transform::ortho_projection(),
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<TileInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumin8 grid instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn projection_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<GridUniform>() as u64)
        .expect("GridUniform has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_shader_locations() {
        let layout = TileInstance::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes[0].shader_location, 1);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].shader_location, 2);
        assert_eq!(layout.attributes[1].offset, 8);
    }

    #[test]
    fn vertex_layout_is_a_unit_quad() {
        let layout = TileVertex::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes[0].shader_location, 0);

        assert_eq!(TILE_INDICES, [0, 1, 2, 0, 2, 3]);
        for v in TILE_VERTICES {
            assert!(v.corner[0] == 0.0 || v.corner[0] == 1.0);
            assert!(v.corner[1] == 0.0 || v.corner[1] == 1.0);
        }
    }

    #[test]
    fn lit_flag_becomes_a_binary_float() {
        assert_eq!(TileInstance::new([3.0, 4.0], true).lit, 1.0);
        assert_eq!(TileInstance::new([3.0, 4.0], false).lit, 0.0);
    }

    #[test]
    fn entry_point_follows_projection_mode() {
        assert_eq!(Projection::FixedExtent.entry_point(), "vs_main");
        assert_eq!(Projection::Matrix.entry_point(), "vs_projected");
        assert_eq!(Projection::default(), Projection::FixedExtent);
    }

    #[test]
    fn uniform_holds_one_mat4() {
        assert_eq!(std::mem::size_of::<GridUniform>(), 64);
    }

    #[test]
    fn shader_parses_and_validates() {
        let module = naga::front::wgsl::parse_str(include_str!("shaders/grid.wgsl"))
            .expect("grid shader should parse");

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .expect("grid shader should validate");

        let entry_points: Vec<_> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"vs_projected"));
        assert!(entry_points.contains(&"fs_main"));
    }
}
