use super::batch::{InstanceData, MAX_INSTANCES};
use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // One instance buffer shared by every batch in the frame
    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (MAX_INSTANCES * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}
