use super::batch::Shape;
use super::Renderer;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Canvas was resized or the context reset; skip this frame
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    if !renderer.draw_list.instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&renderer.draw_list.instances),
        );
    }

    render_batches(renderer, &mut encoder, &view);

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn render_batches(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let [r, g, b, a] = renderer
        .draw_list
        .clear_color
        .unwrap_or(pong_core::Color::BACKGROUND)
        .0;

    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(Color {
                    r: r as f64,
                    g: g as f64,
                    b: b as f64,
                    a: a as f64,
                }),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    for batch in &renderer.draw_list.batches {
        let mesh = match batch.shape {
            Shape::Rect => &renderer.meshes.0,
            Shape::Disc => &renderer.meshes.1,
        };
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..mesh.index_count, 0, batch.instances.clone());
    }
}
