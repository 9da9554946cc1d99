pub mod camera;
pub mod gpu;
pub mod mesh_buffers;

pub use camera::Camera;
pub use gpu::GpuState;
