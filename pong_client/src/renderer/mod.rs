pub mod batch;

#[cfg(target_arch = "wasm32")]
pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod init;
#[cfg(target_arch = "wasm32")]
pub mod pipeline;
#[cfg(target_arch = "wasm32")]
pub mod resources;
#[cfg(target_arch = "wasm32")]
pub mod shaders;

#[cfg(target_arch = "wasm32")]
pub use gpu::Renderer;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::batch::DrawList;
    use super::resources::GameBuffers;
    use super::{draw, init, pipeline, resources};
    use crate::camera::Camera;
    use crate::mesh::{create_circle, create_rectangle, Mesh};
    use wgpu::*;

    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),
        pub camera: Camera,

        pub main_pipeline: RenderPipeline,
        pub camera_bind_group: BindGroup,

        pub buffers: GameBuffers,
        pub meshes: (Mesh, Mesh), // rect, circle

        // Filled by the game's render pass, flushed by present()
        pub draw_list: DrawList,
    }

    impl Renderer {
        /// `field` is the playfield size the camera maps onto the canvas
        pub async fn new(
            canvas: web_sys::HtmlCanvasElement,
            field: (f32, f32),
        ) -> Result<Self, String> {
            let ctx = init::init_wgpu(canvas).await?;
            let camera = Camera::orthographic(field.0, field.1);

            let buffers = resources::create_buffers(&ctx.device, &camera);
            let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

            // Meshes
            let rect_mesh = create_rectangle(&ctx.device);
            let circle_mesh = create_circle(&ctx.device, 32);

            let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &pipes.camera_layout,
                entries: &[BindGroupEntry {
                    binding: 0,
                    resource: buffers.camera.as_entire_binding(),
                }],
            });

            Ok(Self {
                device: ctx.device,
                queue: ctx.queue,
                surface: ctx.surface,
                surface_config: ctx.config,
                size: ctx.size,
                camera,
                main_pipeline: pipes.main_pipeline,
                camera_bind_group,
                buffers,
                meshes: (rect_mesh, circle_mesh),
                draw_list: DrawList::new(),
            })
        }

        /// Submit the frame recorded since the last clear
        pub fn present(&mut self) -> Result<(), String> {
            if self.draw_list.dropped > 0 {
                web_sys::console::warn_1(
                    &format!("{} draw calls over instance limit", self.draw_list.dropped).into(),
                );
            }
            draw::draw_frame(self)
        }
    }

    impl pong_core::Surface for Renderer {
        fn clear(&mut self) {
            self.draw_list.clear();
        }

        fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: pong_core::Color) {
            self.draw_list.draw_rect(x, y, w, h, color);
        }

        fn draw_disc(&mut self, center_x: f32, center_y: f32, radius: f32, color: pong_core::Color) {
            self.draw_list.draw_disc(center_x, center_y, radius, color);
        }
    }
}
