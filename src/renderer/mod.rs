//! WebGPU rendering module
//!
//! The scene is built on the CPU as a colored triangle list in game pixels
//! and mapped to NDC at upload time.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
