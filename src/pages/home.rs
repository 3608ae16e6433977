use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::warn;

use crate::components::concept_diagram::ConceptDiagram;
use crate::components::daily_tasks::DailyTasks;
use crate::components::topic_card::TopicCard;
use crate::config::AppConfig;
use crate::content::Tab;
use crate::graph::ConceptGraph;

/// Learning platform page: topic tabs, concept diagram and daily tasks.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	let query = use_query_map();
	let active = Memo::new(move |_| {
		query
			.with(|q| q.get("tab"))
			.and_then(|slug| match slug.parse::<Tab>() {
				Ok(tab) => Some(tab),
				Err(err) => {
					warn!("{}, showing overview", err);
					None
				}
			})
			.unwrap_or_default()
	});
	// Lives here so folding survives switching tabs.
	let graph = RwSignal::new(ConceptGraph::seed());
	let diagram_height = config.diagram_height;

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="container">
				<h1 class="page-title">"Full Stack Web Development Learning Platform"</h1>

				<nav class="tabs" role="tablist">
					{Tab::ALL
						.into_iter()
						.map(|tab| {
							let selected = move || active.get() == tab;
							view! {
								<a
									href=format!("/?tab={}", tab.slug())
									role="tab"
									class=move || {
										if selected() {
											"tabs__trigger tabs__trigger--active"
										} else {
											"tabs__trigger"
										}
									}
									aria-selected=move || selected().to_string()
								>
									{tab.label()}
								</a>
							}
						})
						.collect_view()}
				</nav>

				<div class="tabs__panel" role="tabpanel">
					{move || match active.get() {
						Tab::Diagram => {
							view! {
								<TopicCard tab=Tab::Diagram>
									<ConceptDiagram graph=graph height=diagram_height />
								</TopicCard>
							}
								.into_any()
						}
						tab => view! { <TopicCard tab=tab /> }.into_any(),
					}}
				</div>

				<DailyTasks />
			</main>
		</ErrorBoundary>
	}
}
