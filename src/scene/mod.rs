pub mod animation;
pub mod color;
pub mod objects;
pub mod pointer;

pub use animation::AnimationLoop;
pub use objects::{MeshObject, Scene};
pub use pointer::PointerState;
