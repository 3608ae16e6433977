//! Daily task widgets: attendance, homework and the next meeting time.

use chrono::{DateTime, Local, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::notify::Notification;

/// Why a homework submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HomeworkError {
	/// Draft is empty or whitespace.
	#[error("Please enter your homework before submitting")]
	Empty,
}

/// Today's date of `now` at `at`, in the same time zone.
///
/// Ambiguous local times resolve to the earlier instant. A local time that
/// does not exist on that day (DST gap) yields `now`.
pub fn compute_next_meeting<Tz: TimeZone>(now: &DateTime<Tz>, at: NaiveTime) -> DateTime<Tz> {
	let local = now.date_naive().and_time(at);
	now.timezone()
		.from_local_datetime(&local)
		.earliest()
		.unwrap_or_else(|| now.clone())
}

/// Per-session task state; nothing here outlives a reload.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskState {
	/// Set once attendance has been marked.
	pub attendance_marked: bool,
	/// Text in the homework field.
	pub homework_draft: String,
	/// Today's meeting, fixed when the state is created.
	pub next_meeting: DateTime<Local>,
}

impl TaskState {
	/// Fresh state with the meeting computed from `now`.
	pub fn new(now: DateTime<Local>, meeting_time: NaiveTime) -> Self {
		Self {
			attendance_marked: false,
			homework_draft: String::new(),
			next_meeting: compute_next_meeting(&now, meeting_time),
		}
	}

	/// Marks attendance. Calling it again keeps the flag and notifies again.
	pub fn mark_attendance(&mut self) -> Notification {
		self.attendance_marked = true;
		Notification::admin("Attendance marked for today")
	}

	/// Replace the homework draft.
	pub fn set_draft(&mut self, text: impl Into<String>) {
		self.homework_draft = text.into();
	}

	/// Submit the current draft. On success the draft is cleared; on failure
	/// it is left as typed.
	pub fn submit_homework(&mut self) -> Result<Notification, HomeworkError> {
		if self.homework_draft.trim().is_empty() {
			return Err(HomeworkError::Empty);
		}
		let draft = std::mem::take(&mut self.homework_draft);
		Ok(Notification::admin(format!("Homework submitted: {}", draft)))
	}

	/// `2024-01-01T21:40:00.000Z` style timestamp.
	pub fn next_meeting_iso(&self) -> String {
		self.next_meeting
			.with_timezone(&Utc)
			.to_rfc3339_opts(SecondsFormat::Millis, true)
	}

	/// Locale-style display, e.g. `1/1/2024, 9:40:00 PM`.
	pub fn next_meeting_display(&self) -> String {
		self.next_meeting.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{FixedOffset, NaiveDate, Timelike};

	fn meeting_time() -> NaiveTime {
		NaiveTime::from_hms_opt(21, 40, 0).unwrap()
	}

	fn state() -> TaskState {
		TaskState::new(Local::now(), meeting_time())
	}

	#[test]
	fn attendance_starts_unmarked_and_sticks() {
		let mut tasks = state();
		assert!(!tasks.attendance_marked);

		let first = tasks.mark_attendance();
		assert!(tasks.attendance_marked);
		let second = tasks.mark_attendance();
		assert!(tasks.attendance_marked);
		assert_eq!(first, second);
		assert_eq!(first.message, "Admin Notification: Attendance marked for today");
	}

	#[test]
	fn blank_homework_is_rejected_and_kept() {
		let mut tasks = state();
		for draft in ["", "   ", "\t\n"] {
			tasks.set_draft(draft);
			assert_eq!(tasks.submit_homework(), Err(HomeworkError::Empty));
			assert_eq!(tasks.homework_draft, draft);
		}
		assert_eq!(
			HomeworkError::Empty.to_string(),
			"Please enter your homework before submitting"
		);
	}

	#[test]
	fn homework_is_submitted_verbatim_and_cleared() {
		let mut tasks = state();
		tasks.set_draft("finish lab 3");
		let sent = tasks.submit_homework().unwrap();
		assert_eq!(sent.severity, crate::notify::Severity::Success);
		assert!(sent.message.contains("finish lab 3"));
		assert_eq!(sent.message, "Admin Notification: Homework submitted: finish lab 3");
		assert_eq!(tasks.homework_draft, "");
	}

	#[test]
	fn meeting_is_today_at_twenty_one_forty() {
		let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
		let meeting = compute_next_meeting(&now, meeting_time());
		assert_eq!(meeting, Utc.with_ymd_and_hms(2024, 1, 1, 21, 40, 0).unwrap());
		assert_eq!(meeting.nanosecond(), 0);

		let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
		assert_eq!(compute_next_meeting(&early, meeting_time()), meeting);
	}

	#[test]
	fn meeting_keeps_the_clock_zone() {
		let tz = FixedOffset::east_opt(9 * 3600).unwrap();
		let now = tz.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
		let meeting = compute_next_meeting(&now, meeting_time());
		assert_eq!(
			meeting.naive_local(),
			NaiveDate::from_ymd_opt(2024, 1, 1)
				.unwrap()
				.and_hms_opt(21, 40, 0)
				.unwrap()
		);
		assert_eq!(
			meeting.to_rfc3339_opts(SecondsFormat::Millis, true),
			"2024-01-01T21:40:00.000+09:00"
		);
	}

	#[test]
	fn meeting_formats() {
		let tasks = state();
		let local = tasks.next_meeting.naive_local();
		assert_eq!((local.hour(), local.minute(), local.second()), (21, 40, 0));
		assert!(tasks.next_meeting_display().ends_with("9:40:00 PM"));
		let iso = tasks.next_meeting_iso();
		assert!(iso.ends_with(".000Z"), "{iso}");
		assert_eq!(DateTime::parse_from_rfc3339(&iso).unwrap(), tasks.next_meeting);
	}
}
