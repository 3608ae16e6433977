//! Toast notifications.

use std::collections::VecDeque;

/// How a toast is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	/// Confirmation.
	Success,
	/// Rejected action.
	Error,
}

impl Severity {
	/// CSS modifier class.
	pub fn class(self) -> &'static str {
		match self {
			Severity::Success => "toast--success",
			Severity::Error => "toast--error",
		}
	}
}

/// A message to show as a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
	/// Toast style.
	pub severity: Severity,
	/// Text shown to the user.
	pub message: String,
}

impl Notification {
	/// Success toast with `message`.
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Success,
			message: message.into(),
		}
	}

	/// Error toast with `message`.
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			message: message.into(),
		}
	}

	/// Success message addressed to the course admins.
	pub fn admin(message: impl AsRef<str>) -> Self {
		Self::success(format!("Admin Notification: {}", message.as_ref()))
	}
}

/// A notification on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
	/// Queue-assigned id, never reused.
	pub id: u64,
	/// What the toast shows.
	pub notification: Notification,
}

/// Visible toasts, oldest first. Pushing past `limit` evicts the oldest.
#[derive(Clone, Debug)]
pub struct ToastQueue {
	toasts: VecDeque<Toast>,
	next_id: u64,
	limit: usize,
}

impl ToastQueue {
	/// Empty queue showing at most `limit` toasts.
	pub fn new(limit: usize) -> Self {
		Self {
			toasts: VecDeque::with_capacity(limit),
			next_id: 0,
			limit: limit.max(1),
		}
	}

	/// Enqueue `notification` and return its toast id.
	pub fn push(&mut self, notification: Notification) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		while self.toasts.len() >= self.limit {
			self.toasts.pop_front();
		}
		self.toasts.push_back(Toast { id, notification });
		id
	}

	/// Remove toast `id`; false if it was already gone.
	pub fn dismiss(&mut self, id: u64) -> bool {
		match self.toasts.iter().position(|t| t.id == id) {
			Some(pos) => {
				self.toasts.remove(pos);
				true
			}
			None => false,
		}
	}

	/// Visible toasts, oldest first.
	pub fn iter(&self) -> impl Iterator<Item = &Toast> {
		self.toasts.iter()
	}

	/// Number of visible toasts.
	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	/// True when nothing is shown.
	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn admin_prefix() {
		let n = Notification::admin("Attendance marked for today");
		assert_eq!(n.severity, Severity::Success);
		assert_eq!(n.message, "Admin Notification: Attendance marked for today");
	}

	#[test]
	fn ids_increase_and_dismiss_removes_one() {
		let mut queue = ToastQueue::new(5);
		let a = queue.push(Notification::success("a"));
		let b = queue.push(Notification::error("b"));
		assert!(b > a);
		assert_eq!(queue.len(), 2);

		assert!(queue.dismiss(a));
		assert!(!queue.dismiss(a));
		let left: Vec<_> = queue.iter().map(|t| t.id).collect();
		assert_eq!(left, vec![b]);
	}

	#[test]
	fn limit_evicts_oldest() {
		let mut queue = ToastQueue::new(2);
		for msg in ["one", "two", "three"] {
			queue.push(Notification::success(msg));
		}
		let messages: Vec<_> = queue.iter().map(|t| t.notification.message.as_str()).collect();
		assert_eq!(messages, vec!["two", "three"]);
	}

	#[test]
	fn zero_limit_still_shows_latest() {
		let mut queue = ToastQueue::new(0);
		queue.push(Notification::success("first"));
		queue.push(Notification::success("second"));
		assert_eq!(queue.len(), 1);
		assert!(!queue.is_empty());
	}
}
