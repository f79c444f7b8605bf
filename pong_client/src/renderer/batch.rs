use std::ops::Range;

use pong_core::{Color, Surface};

/// Upper bound on instances per frame (size of the GPU instance buffer)
pub const MAX_INSTANCES: usize = 256;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // offset_x, offset_y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// Which mesh an instance is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect, // Unit square anchored top-left
    Disc, // Unit disc centered on the origin
}

/// Consecutive instances sharing a mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub shape: Shape,
    pub instances: Range<u32>,
}

/// One frame of draw calls, in submission order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: Option<Color>,
    pub instances: Vec<InstanceData>,
    pub batches: Vec<Batch>,
    pub dropped: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, shape: Shape, instance: InstanceData) {
        if self.instances.len() >= MAX_INSTANCES {
            self.dropped += 1;
            return;
        }

        let index = self.instances.len() as u32;
        self.instances.push(instance);

        match self.batches.last_mut() {
            Some(batch) if batch.shape == shape => batch.instances.end = index + 1,
            _ => self.batches.push(Batch {
                shape,
                instances: index..index + 1,
            }),
        }
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.clear_color = Some(Color::BACKGROUND);
        self.instances.clear();
        self.batches.clear();
        self.dropped = 0;
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.push(
            Shape::Rect,
            InstanceData {
                transform: [x, y, w, h],
                tint: color.0,
            },
        );
    }

    fn draw_disc(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.push(
            Shape::Disc,
            InstanceData {
                transform: [center_x, center_y, radius, radius],
                tint: color.0,
            },
        );
    }
}
