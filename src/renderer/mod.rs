//! WebGPU rendering module
//!
//! Entities draw into a [`ShapeBatch`] through the simulation's canvas seam;
//! [`RenderState`] uploads the batch and draws it as flat-colored triangles.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::ShapeBatch;
pub use pipeline::{RenderState, arena_to_ndc};
pub use vertex::Vertex;
