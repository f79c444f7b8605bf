//! Camera for Pong game
//!
//! Simple 2D orthographic camera

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera for the field
    /// Field is `width` x `height` units, origin top-left, y pointing down
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;

        // Flip the vertical axis so field y grows downward on screen
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }
}

/// Camera uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}
