pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use game_core::PixelBuffer;
use resources::FrameTexture;
use wgpu::*;
use winit::dpi::PhysicalSize;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub blit_pipeline: RenderPipeline,
    pub frame_bind_group: BindGroup,

    pub frame: FrameTexture,
    pub quad: Buffer,
}

impl Renderer {
    /// `frame_width` x `frame_height` is the pixel buffer size, independent
    /// of the window's current size
    pub async fn new(window: Arc<Window>, frame_width: u32, frame_height: u32) -> Result<Self> {
        let ctx = init::init_wgpu(window).await?;

        let frame = resources::create_frame_texture(
            &ctx.device,
            frame_width,
            frame_height,
            resources::frame_format_for(ctx.config.format),
        );
        let quad = resources::create_quad_buffer(&ctx.device);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let frame_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &pipes.frame_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&frame.view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&frame.sampler),
                },
            ],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            blit_pipeline: pipes.blit_pipeline,
            frame_bind_group,
            frame,
            quad,
        })
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.surface_config.width = size.width;
        self.surface_config.height = size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Present one frame. A lost or outdated surface is reconfigured and the
    /// frame dropped; running out of memory is fatal.
    pub fn present(&mut self, pixels: &PixelBuffer) -> Result<()> {
        match draw::draw_frame(self, pixels) {
            Ok(()) => Ok(()),
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                tracing::warn!("surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                Ok(())
            }
            Err(SurfaceError::OutOfMemory) => Err(anyhow!("GPU out of memory")),
            Err(err) => {
                tracing::warn!(%err, "dropped frame");
                Ok(())
            }
        }
    }
}
