//! Data contract between the page and the canvas renderer.

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: Option<String>,
	pub group: Option<u32>,
	/// Drawn with an outline ring.
	pub collapsed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
