use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex of the full-screen quad (matches shader inputs)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Triangle strip covering clip space; uv (0, 0) is the frame's top-left
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [-1.0, -1.0], uv: [0.0, 1.0] },
    QuadVertex { position: [1.0, -1.0], uv: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0], uv: [0.0, 0.0] },
    QuadVertex { position: [1.0, 1.0], uv: [1.0, 0.0] },
];

/// Streaming texture the pixel buffer is uploaded into every frame
pub struct FrameTexture {
    pub texture: Texture,
    pub view: TextureView,
    pub sampler: Sampler,
    pub size: Extent3d,
}

/// Texture format that shows the frame's bytes unchanged on a surface of
/// `surface_format`: sRGB decode only when the surface encodes again.
pub fn frame_format_for(surface_format: TextureFormat) -> TextureFormat {
    if surface_format.is_srgb() {
        TextureFormat::Rgba8UnormSrgb
    } else {
        TextureFormat::Rgba8Unorm
    }
}

pub fn create_frame_texture(
    device: &Device,
    width: u32,
    height: u32,
    format: TextureFormat,
) -> FrameTexture {
    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Frame Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    let view = texture.create_view(&TextureViewDescriptor::default());

    // Nearest keeps the pixel edges hard when the window is scaled
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: Some("Frame Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Nearest,
        min_filter: FilterMode::Nearest,
        mipmap_filter: FilterMode::Nearest,
        ..Default::default()
    });

    FrameTexture {
        texture,
        view,
        sampler,
        size,
    }
}

pub fn create_quad_buffer(device: &Device) -> Buffer {
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Quad Vertex Buffer"),
        contents: bytemuck::cast_slice(&QUAD_VERTICES),
        usage: BufferUsages::VERTEX,
    })
}
