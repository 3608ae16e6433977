//! Leptos client-side learning platform for full stack web development.
//!
//! Informational tabs backed by a static catalog, a concept graph whose
//! nodes fold and unfold their next layer on click, and two daily task
//! widgets that report through toast notifications.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod config;
pub mod content;
pub mod graph;
pub mod notify;
mod pages;
pub mod tasks;

// Top-Level pages
use crate::components::toast::{ToastContainer, provide_notifier};
use crate::config::AppConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", level);
}

/// An app router which renders the platform page and handles 404's
#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_notifier(&config);
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Full Stack Web Development Learning Platform" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>

		<ToastContainer />
	}
}
