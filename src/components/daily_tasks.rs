use chrono::Local;
use leptos::prelude::*;
use log::info;

use crate::components::toast::use_notifier;
use crate::config::AppConfig;
use crate::notify::Notification;
use crate::tasks::TaskState;

/// Attendance checkbox, homework form and the next meeting time.
#[component]
pub fn DailyTasks() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	let notifier = use_notifier();
	let tasks = RwSignal::new(TaskState::new(Local::now(), config.meeting_time));
	let (meeting_iso, meeting_display) =
		tasks.with_untracked(|t| (t.next_meeting_iso(), t.next_meeting_display()));
	info!("next meeting at {}", meeting_iso);

	let submit = move || match tasks.try_update(|t| t.submit_homework()) {
		Some(Ok(sent)) => notifier.notify(sent),
		Some(Err(err)) => notifier.notify(Notification::error(err.to_string())),
		None => {}
	};

	view! {
		<section class="card">
			<h2 class="card__title">"Daily Tasks"</h2>
			<div class="card__content">
				<div class="task task--inline">
					<input
						type="checkbox"
						id="attendance"
						prop:checked=move || tasks.with(|t| t.attendance_marked)
						prop:disabled=move || tasks.with(|t| t.attendance_marked)
						on:change=move |_| {
							if let Some(sent) = tasks.try_update(|t| t.mark_attendance()) {
								notifier.notify(sent);
							}
						}
					/>
					<label for="attendance">"Mark Attendance"</label>
				</div>

				<div class="task">
					<label for="homework">"Submit Homework"</label>
					<div class="task__row">
						<input
							type="text"
							id="homework"
							placeholder="Enter your homework"
							prop:value=move || tasks.with(|t| t.homework_draft.clone())
							on:input=move |ev| tasks.update(|t| t.set_draft(event_target_value(&ev)))
							on:keydown=move |ev| {
								if ev.key() == "Enter" {
									submit();
								}
							}
						/>
						<button class="button" on:click=move |_| submit()>
							"Submit"
						</button>
					</div>
				</div>

				<div class="task">
					<span class="task__label">"Next Google Meet"</span>
					<p>
						<time datetime=meeting_iso>{meeting_display}</time>
					</p>
				</div>
			</div>
		</section>
	}
}
