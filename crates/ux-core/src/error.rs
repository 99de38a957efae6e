//! Error types for the reactive cell.

use crate::reactive::Subscription;

/// Error returned by a fallible listener registered with [`Data::try_listen`].
///
/// [`Data::try_listen`]: crate::Data::try_listen
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ListenerError {
	message: String,
}

impl ListenerError {
	/// Creates a listener error carrying the given message.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// Returns the error message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl From<&str> for ListenerError {
	fn from(message: &str) -> Self {
		Self::new(message)
	}
}

impl From<String> for ListenerError {
	fn from(message: String) -> Self {
		Self::new(message)
	}
}

/// Errors surfaced by writes to a [`Data`] cell.
///
/// [`Data`]: crate::Data
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReactiveError {
	/// A listener failed; the remaining listeners of that write were skipped.
	///
	/// The new value has already been stored when this is returned.
	#[error("listener {subscription} failed: {source}")]
	ListenerFailed {
		/// Handle of the listener that failed.
		subscription: Subscription,
		/// The listener's own error.
		#[source]
		source: ListenerError,
	},
}

impl ReactiveError {
	/// Returns the subscription of the listener that caused this error.
	pub fn subscription(&self) -> Subscription {
		match self {
			ReactiveError::ListenerFailed { subscription, .. } => *subscription,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_listener_error_message() {
		let err = ListenerError::new("boom");
		assert_eq!(err.message(), "boom");
		assert_eq!(err.to_string(), "boom");
	}

	#[rstest]
	#[case(ListenerError::from("from str"), "from str")]
	#[case(ListenerError::from(String::from("from string")), "from string")]
	fn test_listener_error_conversions(#[case] err: ListenerError, #[case] expected: &str) {
		assert_eq!(err.message(), expected);
	}
}
