//! Canvas renderer for force-directed graphs.

mod component;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{GraphData, GraphLink, GraphNode};
