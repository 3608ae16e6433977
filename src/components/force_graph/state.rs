use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::types::GraphData;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;
/// Pointer travel (screen px) under which a press-release counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub color: String,
	pub collapsed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Where a node sat in the previous simulation.
#[derive(Clone, Copy, Debug)]
struct Placement {
	x: f32,
	y: f32,
	is_anchor: bool,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

fn simulation() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

/// Load `data` into a fresh simulation. Nodes found in `placed` keep their
/// position, the rest start on a circle around the origin.
fn build(
	data: &GraphData,
	placed: &HashMap<String, Placement>,
) -> (ForceGraph<NodeInfo, ()>, Vec<(DefaultNodeIdx, DefaultNodeIdx)>) {
	let mut graph = simulation();
	let mut id_to_idx = HashMap::new();
	let mut edges = Vec::new();

	for (i, node) in data.nodes.iter().enumerate() {
		let color = node.color.clone().unwrap_or_else(|| {
			node.group
				.map(|g| COLORS[g as usize % COLORS.len()].into())
				.unwrap_or(COLORS[0].into())
		});
		let Placement { x, y, is_anchor } = placed.get(&node.id).copied().unwrap_or_else(|| {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			Placement {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				is_anchor: false,
			}
		});

		let idx = graph.add_node(NodeData {
			x,
			y,
			mass: 10.0,
			is_anchor,
			user_data: NodeInfo {
				id: node.id.clone(),
				label: node.label.clone(),
				color,
				collapsed: node.collapsed,
			},
		});
		id_to_idx.insert(node.id.clone(), idx);
	}

	for link in &data.links {
		if let (Some(&src), Some(&tgt)) =
			(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
		{
			graph.add_edge(src, tgt, EdgeData::default());
			edges.push((src, tgt));
		}
	}

	(graph, edges)
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let (graph, edges) = build(data, &HashMap::new());

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	/// Replace the graph with `data`, keeping positions of nodes already on screen.
	pub fn sync(&mut self, data: &GraphData) {
		let mut placed = HashMap::new();
		self.graph.visit_nodes(|node| {
			placed.insert(
				node.data.user_data.id.clone(),
				Placement {
					x: node.x(),
					y: node.y(),
					is_anchor: node.data.is_anchor,
				},
			);
		});

		let (graph, edges) = build(data, &placed);
		self.graph = graph;
		self.edges = edges;
		// Indices belong to the old simulation.
		self.drag = DragState::default();
		self.hover = HoverState::default();
		self.animation_running = true;
		debug!("force graph: synced {} edges", self.edge_count());
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the previous highlight around for the fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn data(links: &[(&str, &str)]) -> GraphData {
		let nodes = ["a", "b", "c"]
			.iter()
			.enumerate()
			.map(|(i, id)| GraphNode {
				id: id.to_string(),
				label: Some(id.to_string()),
				color: None,
				group: Some(i as u32),
				collapsed: false,
			})
			.collect();
		let links = links
			.iter()
			.map(|&(s, t)| GraphLink {
				source: s.into(),
				target: t.into(),
			})
			.collect();
		GraphData { nodes, links }
	}

	fn positions(state: &ForceGraphState) -> HashMap<String, (f32, f32)> {
		let mut out = HashMap::new();
		state.graph.visit_nodes(|node| {
			out.insert(node.data.user_data.id.clone(), (node.x(), node.y()));
		});
		out
	}

	#[test]
	fn links_to_unknown_nodes_are_skipped() {
		let state = ForceGraphState::new(&data(&[("a", "b"), ("a", "zzz")]), 800.0, 600.0);
		assert_eq!(state.edge_count(), 1);
	}

	#[test]
	fn sync_replaces_edges_and_keeps_positions() {
		let mut state = ForceGraphState::new(&data(&[("a", "b"), ("b", "c")]), 800.0, 600.0);
		for _ in 0..10 {
			state.tick(0.016);
		}
		let before = positions(&state);

		state.sync(&data(&[("a", "c")]));
		assert_eq!(state.edge_count(), 1);
		assert_eq!(positions(&state), before);
	}

	#[test]
	fn node_lookup_by_position_and_id() {
		let state = ForceGraphState::new(&data(&[]), 800.0, 600.0);
		let (x, y) = positions(&state)["b"];
		let idx = state
			.node_at_position(x as f64 + state.transform.x, y as f64 + state.transform.y)
			.expect("node under cursor");
		assert_eq!(state.node_id(idx).as_deref(), Some("b"));
		assert_eq!(state.node_at_position(-1000.0, -1000.0), None);
	}

	#[test]
	fn hover_collects_neighbors_in_both_directions() {
		let mut state = ForceGraphState::new(&data(&[("a", "b"), ("c", "a")]), 800.0, 600.0);
		let (x, y) = positions(&state)["a"];
		let a = state
			.node_at_position(x as f64 + state.transform.x, y as f64 + state.transform.y)
			.unwrap();
		state.set_hover(Some(a));
		assert_eq!(state.hover.neighbors.len(), 2);
		assert!(state.is_hovered(a));

		state.set_hover(None);
		assert!(state.has_active_highlight());
		assert_eq!(state.hover.prev_node, Some(a));
	}
}
