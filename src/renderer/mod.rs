//! wgpu rendering module
//!
//! Tessellates recorded draw commands into flat-colored triangles.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
