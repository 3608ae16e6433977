use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="container">
			<h1 class="page-title">"Page not found"</h1>
			<p>
				"Nothing lives here. "
				<a href="/">"Back to the learning platform"</a>
			</p>
		</main>
	}
}
