use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode};
use crate::graph::ConceptGraph;

impl From<&ConceptGraph> for GraphData {
	fn from(graph: &ConceptGraph) -> Self {
		GraphData {
			nodes: graph
				.nodes()
				.iter()
				.map(|n| GraphNode {
					id: n.id.clone(),
					label: Some(n.id.clone()),
					color: None,
					group: Some(n.group),
					collapsed: graph.is_collapsed(&n.id),
				})
				.collect(),
			links: graph
				.links()
				.iter()
				.map(|l| GraphLink {
					source: l.source.clone(),
					target: l.target.clone(),
				})
				.collect(),
		}
	}
}

/// Concept map; clicking a node folds or unfolds its next layer.
///
/// `graph` is owned by the caller so the state survives tab switches.
#[component]
pub fn ConceptDiagram(graph: RwSignal<ConceptGraph>, height: f64) -> impl IntoView {
	let data = Signal::derive(move || graph.with(|g| GraphData::from(g)));
	let on_node_click = Callback::new(move |id: String| {
		graph.update(|g| *g = g.on_node_click(&id));
	});

	view! {
		<div class="diagram" style=format!("height: {}px;", height)>
			<ForceGraphCanvas data=data height=Some(height) on_node_click=on_node_click />
		</div>
		<p class="diagram__hint">
			"Click a topic to fold or unfold the next layer. Drag to rearrange, scroll to zoom."
		</p>
	}
}
