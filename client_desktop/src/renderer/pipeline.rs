use super::resources::QuadVertex;
use super::shaders::BLIT_SHADER;
use wgpu::*;

pub struct PipelineState {
    pub blit_pipeline: RenderPipeline,
    pub frame_layout: BindGroupLayout,
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    // 1. Frame texture + sampler layout
    let frame_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Frame Bind Group Layout"),
        entries: &[
            BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    multisampled: false,
                    view_dimension: TextureViewDimension::D2,
                    sample_type: TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 1,
                visibility: ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    // 2. Blit pipeline
    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Blit Shader"),
        source: ShaderSource::Wgsl(BLIT_SHADER.into()),
    });

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Blit Pipeline Layout"),
        bind_group_layouts: &[&frame_layout],
        push_constant_ranges: &[],
    });

    let blit_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Blit Render Pipeline"),
        layout: Some(&layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[VertexBufferLayout {
                array_stride: std::mem::size_of::<QuadVertex>() as u64,
                step_mode: VertexStepMode::Vertex,
                attributes: &[
                    VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: VertexFormat::Float32x2, // position
                    },
                    VertexAttribute {
                        offset: std::mem::size_of::<[f32; 2]>() as u64,
                        shader_location: 1,
                        format: VertexFormat::Float32x2, // uv
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    PipelineState {
        blit_pipeline,
        frame_layout,
    }
}
