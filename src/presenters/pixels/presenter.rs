use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::explorer::ports::ScatterFrame;
use crate::core::actions::rasterize_points::rasterize_points::rasterize_points;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::util::plot_area::PlotArea;

/// Draws explorer frames into a pixels framebuffer with an egui overlay.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    frame: Option<ScatterFrame>,
    needs_redraw: bool,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            frame: None,
            needs_redraw: true,
        })
    }

    pub fn frame(&self) -> Option<&ScatterFrame> {
        self.frame.as_ref()
    }

    pub fn set_frame(&mut self, frame: ScatterFrame) {
        self.frame = Some(frame);
        self.needs_redraw = true;
    }

    /// Mapping between window pixels and the viewport currently on screen.
    pub fn plot_area(&self) -> Option<PlotArea> {
        let frame = self.frame.as_ref()?;
        let pixel_rect = PixelRect::from_size(self.width, self.height).ok()?;

        Some(PlotArea::new(frame.viewport, pixel_rect, frame.hint.equal_aspect))
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.needs_redraw = true;

        Ok(())
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        // Skip rendering for invalid size (e.g., minimized window)
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if self.needs_redraw {
            self.draw_frame();
            self.needs_redraw = false;
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the scatter plot underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn draw_frame(&mut self) {
        let pixel_rect = PixelRect::from_size(self.width, self.height).ok();

        match (self.frame.as_ref(), pixel_rect) {
            (Some(frame), Some(pixel_rect)) => {
                let buffer =
                    rasterize_points(&frame.points, frame.viewport, pixel_rect, &frame.hint);
                copy_rgb_into_rgba(&buffer, self.pixels.frame_mut());
            }
            _ => self.draw_placeholder(),
        }
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[255, 255, 255, 255]);
        }
    }
}

fn copy_rgb_into_rgba(buffer: &PixelBuffer, dest: &mut [u8]) {
    for (src_pixel, dst_pixel) in buffer.buffer().chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}
