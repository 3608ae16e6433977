use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use log::{debug, warn};

use super::seed;

/// A concept and the hierarchy layer it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptNode {
	/// Unique label, also used as the link endpoint.
	pub id: String,
	/// Hierarchy layer; expanding links a node to layer `group + 1`.
	pub group: u32,
}

/// Directed edge between two concept ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConceptLink {
	/// Id of the node the link starts at.
	pub source: String,
	/// Id of the node the link points to.
	pub target: String,
}

impl ConceptLink {
	/// Link `source -> target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Whether a node's child layer is currently linked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
	/// Child layer linked in; every node starts here.
	#[default]
	Expanded,
	/// Outgoing links removed.
	Collapsed,
}

impl Expansion {
	/// The state a click moves to.
	pub fn toggled(self) -> Self {
		match self {
			Expansion::Expanded => Expansion::Collapsed,
			Expansion::Collapsed => Expansion::Expanded,
		}
	}
}

/// Rejected graph input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
	/// Two nodes share an id.
	#[error("duplicate node id `{0}`")]
	DuplicateNode(String),
	/// A link names a node that is not in the node list.
	#[error("link {from} -> {to} references an unknown node")]
	UnknownEndpoint {
		/// Link source id.
		from: String,
		/// Link target id.
		to: String,
	},
}

/// Node set plus the currently visible links.
///
/// Values are never mutated in place: [`ConceptGraph::on_node_click`]
/// returns the next graph and leaves `self` untouched. Nodes are shared
/// between successive values, links and the expansion map are copied.
#[derive(Clone, Debug, PartialEq)]
pub struct ConceptGraph {
	nodes: Arc<[ConceptNode]>,
	links: Vec<ConceptLink>,
	// Absent ids are expanded.
	expansion: BTreeMap<String, Expansion>,
}

impl ConceptGraph {
	/// The web development concept map.
	pub fn seed() -> Self {
		Self {
			nodes: seed::NODES
				.iter()
				.map(|&(id, group)| ConceptNode {
					id: id.to_string(),
					group,
				})
				.collect(),
			links: seed::LINKS
				.iter()
				.map(|&(source, target)| ConceptLink::new(source, target))
				.collect(),
			expansion: BTreeMap::new(),
		}
	}

	/// Build a graph from arbitrary data, rejecting duplicate ids and dangling links.
	pub fn try_new(nodes: Vec<ConceptNode>, links: Vec<ConceptLink>) -> Result<Self, GraphError> {
		let mut ids = HashSet::with_capacity(nodes.len());
		for node in &nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(GraphError::DuplicateNode(node.id.clone()));
			}
		}
		if let Some(link) = links
			.iter()
			.find(|l| !ids.contains(l.source.as_str()) || !ids.contains(l.target.as_str()))
		{
			return Err(GraphError::UnknownEndpoint {
				from: link.source.clone(),
				to: link.target.clone(),
			});
		}

		Ok(Self {
			nodes: nodes.into(),
			links,
			expansion: BTreeMap::new(),
		})
	}

	/// All nodes, in render order.
	pub fn nodes(&self) -> &[ConceptNode] {
		&self.nodes
	}

	/// Visible links, in insertion order.
	pub fn links(&self) -> &[ConceptLink] {
		&self.links
	}

	/// Node with identifier `id`.
	pub fn node(&self, id: &str) -> Option<&ConceptNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Current state of `id`; unknown ids read as expanded.
	pub fn expansion(&self, id: &str) -> Expansion {
		self.expansion.get(id).copied().unwrap_or_default()
	}

	/// Whether `id` has been folded.
	pub fn is_collapsed(&self, id: &str) -> bool {
		self.expansion(id) == Expansion::Collapsed
	}

	/// Nodes one layer below `id`, i.e. every node whose group is `group + 1`.
	/// The last representable group has no layer below it.
	pub fn child_layer(&self, id: &str) -> impl Iterator<Item = &ConceptNode> {
		let layer = self.node(id).and_then(|n| n.group.checked_add(1));
		self.nodes
			.iter()
			.filter(move |n| Some(n.group) == layer)
	}

	/// Links whose source is `id`.
	pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ConceptLink> {
		self.links.iter().filter(move |l| l.source == id)
	}

	/// Toggle `id` and return the resulting graph.
	///
	/// An expanded node collapses: all of its outgoing links are dropped,
	/// except a link back to itself. A collapsed node expands: a link to each
	/// node of the next layer is appended unless that link is already present.
	/// Unknown ids leave the graph as it was.
	pub fn on_node_click(&self, id: &str) -> Self {
		let Some(node) = self.node(id) else {
			warn!("click on unknown concept `{}`", id);
			return self.clone();
		};

		let next = self.expansion(id).toggled();
		let links = match next {
			Expansion::Collapsed => self
				.links
				.iter()
				.filter(|l| l.source != node.id || l.target == node.id)
				.cloned()
				.collect(),
			Expansion::Expanded => {
				let mut links = self.links.clone();
				for child in self.child_layer(id) {
					let link = ConceptLink::new(node.id.as_str(), child.id.as_str());
					if !links.contains(&link) {
						links.push(link);
					}
				}
				links
			}
		};

		debug!(
			"{} `{}`: {} -> {} links",
			match next {
				Expansion::Collapsed => "collapse",
				Expansion::Expanded => "expand",
			},
			id,
			self.links.len(),
			links.len()
		);

		let mut expansion = self.expansion.clone();
		expansion.insert(node.id.clone(), next);
		Self {
			nodes: Arc::clone(&self.nodes),
			links,
			expansion,
		}
	}
}

impl Default for ConceptGraph {
	fn default() -> Self {
		Self::seed()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, group: u32) -> ConceptNode {
		ConceptNode {
			id: id.to_string(),
			group,
		}
	}

	fn targets_of<'a>(graph: &'a ConceptGraph, id: &'a str) -> Vec<&'a str> {
		graph.outgoing(id).map(|l| l.target.as_str()).collect()
	}

	#[test]
	fn seed_is_well_formed() {
		let graph = ConceptGraph::seed();
		assert_eq!(graph.nodes().len(), 28);
		assert_eq!(graph.links().len(), 27);

		let rebuilt = ConceptGraph::try_new(graph.nodes().to_vec(), graph.links().to_vec());
		assert_eq!(rebuilt, Ok(graph.clone()));
		assert!(graph.nodes().iter().all(|n| !graph.is_collapsed(&n.id)));
	}

	#[test]
	fn try_new_rejects_duplicates_and_dangling_links() {
		let dup = ConceptGraph::try_new(vec![node("a", 0), node("a", 1)], vec![]);
		assert_eq!(dup, Err(GraphError::DuplicateNode("a".into())));

		let dangling = ConceptGraph::try_new(vec![node("a", 0)], vec![ConceptLink::new("a", "b")]);
		assert_eq!(
			dangling,
			Err(GraphError::UnknownEndpoint {
				from: "a".into(),
				to: "b".into()
			})
		);
	}

	#[test]
	fn first_click_collapses_outgoing_links_only() {
		let graph = ConceptGraph::seed();
		let next = graph.on_node_click("Front End Frameworks");

		assert!(next.is_collapsed("Front End Frameworks"));
		assert_eq!(next.outgoing("Front End Frameworks").count(), 0);
		assert_eq!(next.links().len(), graph.links().len() - 6);

		// Everything not sourced at the node survives, in order.
		let untouched: Vec<_> = graph
			.links()
			.iter()
			.filter(|l| l.source != "Front End Frameworks")
			.cloned()
			.collect();
		assert_eq!(next.links(), untouched.as_slice());
		assert!(
			next.links()
				.contains(&ConceptLink::new("Front End Developer", "Front End Frameworks"))
		);
	}

	#[test]
	fn click_leaves_previous_value_untouched() {
		let graph = ConceptGraph::seed();
		let _ = graph.on_node_click("Back End");
		assert_eq!(graph, ConceptGraph::seed());
	}

	#[test]
	fn expand_adds_exactly_the_next_layer() {
		let collapsed = ConceptGraph::seed().on_node_click("Testing");
		assert_eq!(targets_of(&collapsed, "Testing"), Vec::<&str>::new());

		let expanded = collapsed.on_node_click("Testing");
		assert_eq!(expanded.expansion("Testing"), Expansion::Expanded);

		// group 3 -> every group 4 node, not the original children
		assert_eq!(
			targets_of(&expanded, "Testing"),
			vec!["Backend Technologies", "Data Base"]
		);
		assert_eq!(expanded.links().len(), collapsed.links().len() + 2);
		assert_eq!(&expanded.links()[..collapsed.links().len()], collapsed.links());
	}

	#[test]
	fn expand_appends_in_node_order() {
		let graph = ConceptGraph::try_new(
			vec![node("a", 0), node("c", 1), node("b", 1), node("d", 2)],
			vec![ConceptLink::new("a", "b")],
		)
		.unwrap();
		let graph = graph.on_node_click("a").on_node_click("a");
		assert_eq!(
			graph.links(),
			&[ConceptLink::new("a", "c"), ConceptLink::new("a", "b")]
		);
	}

	#[test]
	fn collapse_keeps_self_loops() {
		let graph = ConceptGraph::try_new(
			vec![node("a", 0), node("b", 1)],
			vec![
				ConceptLink::new("a", "a"),
				ConceptLink::new("a", "b"),
				ConceptLink::new("b", "a"),
			],
		)
		.unwrap();
		let next = graph.on_node_click("a");
		assert_eq!(
			next.links(),
			&[ConceptLink::new("a", "a"), ConceptLink::new("b", "a")]
		);

		let back = next.on_node_click("a");
		assert_eq!(
			back.links(),
			&[
				ConceptLink::new("a", "a"),
				ConceptLink::new("b", "a"),
				ConceptLink::new("a", "b"),
			]
		);
	}

	#[test]
	fn toggle_round_trip_does_not_grow_links() {
		// group 4 -> group 5: the three basic front end languages
		let once = ConceptGraph::seed()
			.on_node_click("Data Base")
			.on_node_click("Data Base");
		assert_eq!(once.links().len(), 27 - 5 + 3);

		let twice = once.on_node_click("Data Base").on_node_click("Data Base");
		assert!(twice.links().len() >= once.links().len());
		assert_eq!(twice.links(), once.links());

		let unique: HashSet<_> = twice.links().iter().collect();
		assert_eq!(unique.len(), twice.links().len());
	}

	#[test]
	fn leaf_click_still_flips_state() {
		let graph = ConceptGraph::seed();
		let collapsed = graph.on_node_click("Nginx");
		assert!(collapsed.is_collapsed("Nginx"));
		assert_eq!(collapsed.links(), graph.links());

		let expanded = collapsed.on_node_click("Nginx");
		assert!(!expanded.is_collapsed("Nginx"));
		assert_eq!(expanded.links(), graph.links());
	}

	#[test]
	fn top_group_node_has_no_layer_below() {
		let graph = ConceptGraph::try_new(
			vec![node("top", u32::MAX), node("root", 0)],
			vec![],
		)
		.unwrap();
		assert_eq!(graph.child_layer("top").count(), 0);

		let expanded = graph.on_node_click("top").on_node_click("top");
		assert_eq!(expanded.expansion("top"), Expansion::Expanded);
		assert!(expanded.links().is_empty());
	}

	#[test]
	fn unknown_node_is_ignored() {
		let graph = ConceptGraph::seed();
		assert_eq!(graph.on_node_click("COBOL"), graph);
	}

	#[test]
	fn child_layer_uses_group_plus_one() {
		let graph = ConceptGraph::seed();
		let layer: Vec<_> = graph
			.child_layer("Web development")
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(layer, vec!["Front End Developer"]);
		assert_eq!(graph.child_layer("Nginx").count(), 0);
		assert_eq!(graph.child_layer("missing").count(), 0);
	}
}
