//! Subscription handles.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter so that handles from different cells never collide.
static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one listener registered on a [`Data`] cell.
///
/// Dropping a `Subscription` does not detach the listener; pass it to
/// [`Data::unsubscribe`] to do that. A handle only ever matches the listener it
/// was issued for, so using it with another cell is a no-op.
///
/// [`Data`]: crate::Data
/// [`Data::unsubscribe`]: crate::Data::unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

impl Subscription {
	pub(crate) fn next() -> Self {
		Self(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed))
	}

	/// Returns the raw identifier.
	pub fn id(self) -> u64 {
		self.0
	}
}

impl fmt::Display for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}
