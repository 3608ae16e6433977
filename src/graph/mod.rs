//! Concept graph shown on the Diagram tab.

mod model;
mod seed;

pub use model::{ConceptGraph, ConceptLink, ConceptNode, Expansion, GraphError};
