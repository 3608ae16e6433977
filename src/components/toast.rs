//! Bottom-right toast surface.

use std::time::Duration;

use leptos::prelude::*;
use log::{info, warn};

use crate::config::AppConfig;
use crate::notify::{Notification, Severity, Toast, ToastQueue};

/// Handle for raising toasts, shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
	queue: RwSignal<ToastQueue>,
	duration: Duration,
}

impl Notifier {
	pub fn new(config: &AppConfig) -> Self {
		Self {
			queue: RwSignal::new(ToastQueue::new(config.toast_limit)),
			duration: config.toast_duration,
		}
	}

	/// Show `notification` and dismiss it after the configured duration.
	pub fn notify(&self, notification: Notification) {
		match notification.severity {
			Severity::Success => info!("notify: {}", notification.message),
			Severity::Error => warn!("notify: {}", notification.message),
		}
		let Some(id) = self.queue.try_update(|q| q.push(notification)) else {
			return;
		};
		let queue = self.queue;
		set_timeout(
			move || {
				let _ = queue.try_update(|q| q.dismiss(id));
			},
			self.duration,
		);
	}

	pub fn dismiss(&self, id: u64) {
		self.queue.update(|q| {
			q.dismiss(id);
		});
	}

	pub fn toasts(&self) -> Vec<Toast> {
		self.queue.with(|q| q.iter().cloned().collect())
	}
}

pub fn provide_notifier(config: &AppConfig) -> Notifier {
	let notifier = Notifier::new(config);
	provide_context(notifier);
	notifier
}

pub fn use_notifier() -> Notifier {
	expect_context::<Notifier>()
}

#[component]
pub fn ToastContainer() -> impl IntoView {
	let notifier = use_notifier();

	view! {
		<div class="toast-container" role="status" aria-live="polite">
			<For
				each=move || notifier.toasts()
				key=|toast| toast.id
				children=move |toast: Toast| {
					let id = toast.id;
					view! {
						<div class=format!("toast {}", toast.notification.severity.class())>
							<span class="toast__message">{toast.notification.message}</span>
							<button
								class="toast__close"
								aria-label="Dismiss"
								on:click=move |_| notifier.dismiss(id)
							>
								"×"
							</button>
						</div>
					}
				}
			/>
		</div>
	}
}
