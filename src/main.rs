use fullstack_learning::{App, config::AppConfig, init_logging};
use leptos::prelude::*;

fn main() {
	let config = AppConfig::default();
	init_logging(config.log_level);
	mount_to_body(move || view! { <App config=config /> });
}
