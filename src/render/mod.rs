//! Render data module
//!
//! Packs the simulation's final positions and orientations into buffers an
//! external renderer consumes: a polyline for debug drawing and per-link
//! transforms for one instanced draw call. No physics lives here.

mod data;

pub use data::{LineVertex, LinkInstance, RopeRenderData};
