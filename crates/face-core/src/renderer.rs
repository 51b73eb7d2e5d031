use crate::outline::FaceOutline;
use crate::render::OutlineStyle;

/// Uniforms for the silhouette shader. Lengths are in outline units and scaled
/// to pixels by `scale`; `origin` and `viewport` are in physical pixels.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FaceUniforms {
    /// Two cubic segments, see [`FaceOutline::to_uniform_array`].
    pub outline: [[f32; 4]; 4],
    pub fill_color: [f32; 4],
    pub stroke_color: [f32; 4],
    /// Anchor of the outline in framebuffer pixels.
    pub origin: [f32; 2],
    pub viewport: [f32; 2],
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// Pixels per outline unit.
    pub scale: f32,
    pub _pad: [f32; 2],
}

impl Default for FaceUniforms {
    fn default() -> Self {
        Self::from_outline(
            [0.0, 0.0],
            &FaceOutline::neutral(0.0),
            &OutlineStyle {
                fill: [0.0; 3],
                stroke: [0.0; 3],
                stroke_width: 0.0,
            },
            1.0,
            [1.0, 1.0],
        )
    }
}

impl FaceUniforms {
    pub fn from_outline(
        origin: [f32; 2],
        outline: &FaceOutline,
        style: &OutlineStyle,
        scale: f32,
        viewport: [f32; 2],
    ) -> Self {
        let [fr, fg, fb] = style.fill;
        let [sr, sg, sb] = style.stroke;
        Self {
            outline: outline.to_uniform_array(),
            fill_color: [fr, fg, fb, 1.0],
            stroke_color: [sr, sg, sb, 1.0],
            origin,
            viewport,
            stroke_width: style.stroke_width * scale,
            scale,
            _pad: [0.0; 2],
        }
    }
}

/// Draws the face silhouette with a full-screen fragment shader.
///
/// The shader samples the two outline cubics, fills by winding number and strokes
/// by distance to the sampled polyline. Pixels outside the face are transparent,
/// so the pass can share a target with other layers.
pub struct FaceRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FaceRenderer {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("face_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/face.wgsl").into()),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("face_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("face_uniform_buffer"),
            size: std::mem::size_of::<FaceUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("face_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("face_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("face_render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload this frame's uniforms.
    pub fn prepare(&self, queue: &wgpu::Queue, uniforms: &FaceUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the silhouette draw into an open pass.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
#[path = "../tests/unit/renderer.rs"]
mod tests;
