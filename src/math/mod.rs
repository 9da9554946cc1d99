pub mod mesh;
pub mod wave;

pub use mesh::{TriangleMesh, plane};
pub use wave::{displace, smooth_toward};
