//! Runtime settings shared through Leptos context.

use std::time::Duration;

use chrono::NaiveTime;
use log::Level;

/// Hour of the daily meeting (local time).
pub const MEETING_HOUR: u32 = 21;
/// Minute of the daily meeting.
pub const MEETING_MINUTE: u32 = 40;

/// Application settings. `Default` holds the values the page ships with.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Local time of the daily meeting.
	pub meeting_time: NaiveTime,
	/// How long a toast stays up.
	pub toast_duration: Duration,
	/// Most toasts shown at once.
	pub toast_limit: usize,
	/// Diagram canvas height in pixels.
	pub diagram_height: f64,
	/// Console log filter.
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			meeting_time: NaiveTime::from_hms_opt(MEETING_HOUR, MEETING_MINUTE, 0)
				.unwrap_or_default(),
			toast_duration: Duration::from_secs(5),
			toast_limit: 5,
			diagram_height: 600.0,
			log_level: Level::Debug,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Timelike;

	#[test]
	fn default_meeting_is_twenty_one_forty() {
		let config = AppConfig::default();
		assert_eq!(config.meeting_time.hour(), 21);
		assert_eq!(config.meeting_time.minute(), 40);
		assert_eq!(config.meeting_time.second(), 0);
		assert_eq!(config.meeting_time.nanosecond(), 0);
	}

	#[test]
	fn default_toasts_are_bounded() {
		let config = AppConfig::default();
		assert!(config.toast_limit > 0);
		assert_eq!(config.toast_duration, Duration::from_secs(5));
	}
}
