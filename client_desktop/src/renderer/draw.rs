use game_core::PixelBuffer;
use wgpu::*;

use super::Renderer;

/// Upload the frame, stretch it over the surface and present
pub fn draw_frame(renderer: &Renderer, pixels: &PixelBuffer) -> Result<(), SurfaceError> {
    upload_pixels(renderer, pixels);

    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Blit Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&renderer.blit_pipeline);
        pass.set_bind_group(0, &renderer.frame_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.quad.slice(..));
        pass.draw(0..4, 0..1);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn upload_pixels(renderer: &Renderer, pixels: &PixelBuffer) {
    renderer.queue.write_texture(
        TexelCopyTextureInfo {
            texture: &renderer.frame.texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        pixels.as_bytes(),
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(pixels.stride()),
            rows_per_image: Some(pixels.height()),
        },
        renderer.frame.size,
    );
}
