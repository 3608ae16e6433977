use leptos::prelude::*;

use crate::content::{self, Block, Tab};

fn block_view(block: &'static Block) -> AnyView {
	match *block {
		Block::Heading(text) => view! { <h3 class="card__heading">{text}</h3> }.into_any(),
		Block::Paragraph(text) => view! { <p class="card__text">{text}</p> }.into_any(),
		Block::Bullets(entries) => view! {
			<ul class="card__list">
				{entries
					.iter()
					.map(|e| view! { <li>{e.term}": "{e.detail}</li> })
					.collect_view()}
			</ul>
		}
		.into_any(),
	}
}

/// The catalog card for `tab`, followed by any children.
#[component]
pub fn TopicCard(tab: Tab, #[prop(optional)] children: Option<Children>) -> impl IntoView {
	let card = content::card(tab);

	view! {
		<section class="card">
			<h2 class="card__title">{card.title}</h2>
			<div class="card__content">
				{card.blocks.iter().map(block_view).collect_view()}
				{children.map(|children| children())}
			</div>
		</section>
	}
}
