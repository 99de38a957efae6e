//! Data - Reactive single-value cell
//!
//! `Data<T>` holds one value and an ordered list of listeners. Every write goes
//! through [`Data::set`] (or [`Data::update`]) and synchronously calls each
//! listener with the new value, in registration order, before returning.
//!
//! ## Semantics
//!
//! - **No equality short-circuit**: writing the value a cell already holds still
//!   notifies every listener.
//! - **First failure wins**: a listener registered with [`Data::try_listen`] may
//!   fail; the remaining listeners are skipped and the error is returned from the
//!   write. The new value stays stored.
//! - **Re-entrant writes recurse**: a listener may write to the cell it listens
//!   on. Nothing guards against a listener that does so unconditionally.
//! - **Snapshot per write**: the listener list is copied before a notification
//!   pass. Listeners added during the pass run from the next write on; listeners
//!   removed during the pass still run in that pass.
//!
//! ## Example
//!
//! ```
//! use ux_core::Data;
//!
//! let count = Data::new(0);
//! count.set(42).unwrap();
//! assert_eq!(count.get(), 42);
//!
//! count.update(|n| *n += 1).unwrap();
//! assert_eq!(count.get(), 43);
//! ```

use core::cell::RefCell;
use core::fmt;

extern crate alloc;
use alloc::rc::{Rc, Weak};

use super::subscription::Subscription;
use crate::error::{ListenerError, ReactiveError};

type Listener<T> = Rc<dyn Fn(&T) -> Result<(), ListenerError>>;

struct Shared<T> {
	value: RefCell<T>,
	listeners: RefCell<Vec<(Subscription, Listener<T>)>>,
}

/// A reactive cell holding a single value.
///
/// Cloning a `Data` returns another handle to the same cell; all clones see the
/// same value and share one listener list.
pub struct Data<T: 'static> {
	shared: Rc<Shared<T>>,
}

impl<T: 'static> Data<T> {
	/// Creates a cell holding `value` with no listeners.
	pub fn new(value: T) -> Self {
		Self {
			shared: Rc::new(Shared {
				value: RefCell::new(value),
				listeners: RefCell::new(Vec::new()),
			}),
		}
	}

	/// Returns a copy of the current value.
	///
	/// Reading has no side effects.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.shared.value.borrow().clone()
	}

	/// Calls `f` with a reference to the current value and returns its result.
	///
	/// # Panics
	///
	/// Panics if `f` writes to this same cell.
	///
	/// # Example
	///
	/// ```
	/// use ux_core::Data;
	///
	/// let items = Data::new(vec![1, 2, 3]);
	/// assert_eq!(items.with(|items| items.len()), 3);
	/// ```
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.shared.value.borrow())
	}

	/// Registers a listener called with the new value on every write.
	///
	/// Returns the handle to pass to [`Data::unsubscribe`]. Ignoring the handle
	/// makes the listener permanent.
	///
	/// # Example
	///
	/// ```
	/// use ux_core::Data;
	/// use std::cell::Cell;
	/// use std::rc::Rc;
	///
	/// let flag = Data::new(false);
	/// let writes = Rc::new(Cell::new(0));
	/// let counter = writes.clone();
	/// flag.listen(move |_| counter.set(counter.get() + 1));
	///
	/// flag.set(true).unwrap();
	/// flag.set(true).unwrap();
	/// assert_eq!(writes.get(), 2);
	/// ```
	pub fn listen<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&T) + 'static,
	{
		self.try_listen(move |value| {
			listener(value);
			Ok(())
		})
	}

	/// Registers a listener that may fail.
	///
	/// When it returns an error, later listeners of that write are skipped and
	/// the write returns [`ReactiveError::ListenerFailed`].
	pub fn try_listen<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&T) -> Result<(), ListenerError> + 'static,
	{
		let subscription = Subscription::next();
		self.shared
			.listeners
			.borrow_mut()
			.push((subscription, Rc::new(listener)));
		tracing::trace!(%subscription, "data listener registered");
		subscription
	}

	/// Detaches the listener registered under `subscription`.
	///
	/// Returns `false` when no such listener is registered on this cell, for
	/// example because it was already removed.
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		let removed = {
			let mut listeners = self.shared.listeners.borrow_mut();
			let index = listeners.iter().position(|(id, _)| *id == subscription);
			index.map(|index| listeners.remove(index))
		};
		// Dropped after the borrow ends: the closure may own handles whose
		// teardown unsubscribes from this same cell.
		match removed {
			Some(_) => {
				tracing::trace!(%subscription, "data listener removed");
				true
			}
			None => false,
		}
	}

	/// Stores `value` and notifies every listener with it.
	///
	/// # Errors
	///
	/// Returns [`ReactiveError::ListenerFailed`] for the first listener that
	/// fails. The value has been stored at that point.
	pub fn set(&self, value: T) -> Result<(), ReactiveError>
	where
		T: Clone,
	{
		*self.shared.value.borrow_mut() = value.clone();
		self.notify(&value)
	}

	/// Mutates the value in place, then notifies exactly like [`Data::set`].
	///
	/// # Errors
	///
	/// Same as [`Data::set`].
	pub fn update<F>(&self, f: F) -> Result<(), ReactiveError>
	where
		T: Clone,
		F: FnOnce(&mut T),
	{
		let value = {
			let mut current = self.shared.value.borrow_mut();
			f(&mut current);
			current.clone()
		};
		self.notify(&value)
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.shared.listeners.borrow().len()
	}

	/// Returns a non-owning handle to this cell.
	pub fn downgrade(&self) -> WeakData<T> {
		WeakData {
			shared: Rc::downgrade(&self.shared),
		}
	}

	/// Returns `true` if both handles point to the same cell.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.shared, &other.shared)
	}

	fn notify(&self, value: &T) -> Result<(), ReactiveError> {
		let listeners = self.shared.listeners.borrow().clone();
		tracing::trace!(listeners = listeners.len(), "notifying data listeners");
		for (subscription, listener) in listeners {
			listener(value).map_err(|source| ReactiveError::ListenerFailed {
				subscription,
				source,
			})?;
		}
		Ok(())
	}
}

impl<T: 'static> Clone for Data<T> {
	fn clone(&self) -> Self {
		Self {
			shared: self.shared.clone(),
		}
	}
}

impl<T: Default + 'static> Default for Data<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: 'static> From<T> for Data<T> {
	fn from(value: T) -> Self {
		Self::new(value)
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Data<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut debug = f.debug_struct("Data");
		match self.shared.value.try_borrow() {
			Ok(value) => debug.field("value", &*value),
			Err(_) => debug.field("value", &"<borrowed>"),
		};
		debug
			.field("listeners", &self.shared.listeners.borrow().len())
			.finish()
	}
}

/// Non-owning handle to a [`Data`] cell.
pub struct WeakData<T: 'static> {
	shared: Weak<Shared<T>>,
}

impl<T: 'static> WeakData<T> {
	/// Returns a strong handle if the cell is still alive.
	pub fn upgrade(&self) -> Option<Data<T>> {
		self.shared.upgrade().map(|shared| Data { shared })
	}

	/// Detaches `subscription` if the cell is still alive.
	///
	/// Returns `false` when the cell is gone or the listener was already
	/// removed.
	pub fn unsubscribe(&self, subscription: Subscription) -> bool {
		self.upgrade()
			.is_some_and(|data| data.unsubscribe(subscription))
	}
}

impl<T: 'static> Clone for WeakData<T> {
	fn clone(&self) -> Self {
		Self {
			shared: self.shared.clone(),
		}
	}
}

impl<T: 'static> fmt::Debug for WeakData<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WeakData")
			.field("alive", &(self.shared.strong_count() > 0))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::cell::Cell;
	use rstest::rstest;

	#[rstest]
	fn test_data_creation() {
		let data = Data::new(42);
		assert_eq!(data.get(), 42);
		assert_eq!(data.listener_count(), 0);
	}

	#[rstest]
	fn test_data_set() {
		let data = Data::new(0);
		data.set(100).unwrap();
		assert_eq!(data.get(), 100);
	}

	#[rstest]
	fn test_data_update() {
		let data = Data::new(1);
		data.update(|n| *n *= 10).unwrap();
		assert_eq!(data.get(), 10);
	}

	#[rstest]
	fn test_data_clone_shares_value_and_listeners() {
		let first = Data::new(String::from("a"));
		let second = first.clone();
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		second.listen(move |_| counter.set(counter.get() + 1));

		first.set(String::from("b")).unwrap();

		assert_eq!(second.get(), "b");
		assert_eq!(hits.get(), 1);
		assert!(first.ptr_eq(&second));
		assert!(!first.ptr_eq(&Data::new(String::new())));
	}

	#[rstest]
	fn test_listeners_fire_in_registration_order() {
		let data = Data::new(0);
		let order = Rc::new(RefCell::new(Vec::new()));
		for tag in ["first", "second", "third"] {
			let order = order.clone();
			data.listen(move |value| order.borrow_mut().push((tag, *value)));
		}

		data.set(5).unwrap();

		assert_eq!(
			*order.borrow(),
			vec![("first", 5), ("second", 5), ("third", 5)]
		);
	}

	#[rstest]
	fn test_set_with_equal_value_still_notifies() {
		let data = Data::new(3);
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		data.listen(move |_| counter.set(counter.get() + 1));

		data.set(3).unwrap();
		data.set(3).unwrap();

		assert_eq!(hits.get(), 2);
	}

	#[rstest]
	fn test_failing_listener_aborts_remaining_and_keeps_value() {
		// Arrange
		let data = Data::new(0);
		let reached = Rc::new(Cell::new(false));
		let before = Rc::new(Cell::new(false));
		let before_flag = before.clone();
		data.listen(move |_| before_flag.set(true));
		let failing = data.try_listen(|value| {
			if *value > 10 {
				Err(ListenerError::new("too large"))
			} else {
				Ok(())
			}
		});
		let reached_flag = reached.clone();
		data.listen(move |_| reached_flag.set(true));

		// Act
		let result = data.set(11);

		// Assert
		let err = result.unwrap_err();
		assert_eq!(err.subscription(), failing);
		assert_eq!(
			err,
			ReactiveError::ListenerFailed {
				subscription: failing,
				source: ListenerError::new("too large"),
			}
		);
		assert!(before.get());
		assert!(!reached.get());
		assert_eq!(data.get(), 11);
	}

	#[rstest]
	fn test_unsubscribe_detaches_listener() {
		let data = Data::new(0);
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let subscription = data.listen(move |_| counter.set(counter.get() + 1));

		data.set(1).unwrap();
		assert!(data.unsubscribe(subscription));
		data.set(2).unwrap();

		assert_eq!(hits.get(), 1);
		assert_eq!(data.listener_count(), 0);
		assert!(!data.unsubscribe(subscription));
	}

	#[rstest]
	fn test_unsubscribe_with_foreign_handle_is_noop() {
		let left = Data::new(0);
		let right = Data::new(0);
		let foreign = right.listen(|_| {});
		left.listen(|_| {});

		assert!(!left.unsubscribe(foreign));
		assert_eq!(left.listener_count(), 1);
		assert_eq!(right.listener_count(), 1);
	}

	#[rstest]
	fn test_reentrant_set_recurses_synchronously() {
		let data = Data::new(0);
		let seen = Rc::new(RefCell::new(Vec::new()));
		let inner = data.clone();
		let log = seen.clone();
		data.listen(move |value| {
			log.borrow_mut().push(*value);
			if *value < 3 {
				inner.set(value + 1).unwrap();
			}
		});

		data.set(0).unwrap();

		assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
		assert_eq!(data.get(), 3);
	}

	#[rstest]
	fn test_listener_added_during_notification_runs_next_time() {
		let data = Data::new(0);
		let late_hits = Rc::new(Cell::new(0));
		let registered = Rc::new(Cell::new(false));
		let handle = data.clone();
		let hits = late_hits.clone();
		let once = registered.clone();
		data.listen(move |_| {
			if !once.get() {
				once.set(true);
				let hits = hits.clone();
				handle.listen(move |_| hits.set(hits.get() + 1));
			}
		});

		data.set(1).unwrap();
		assert_eq!(late_hits.get(), 0);

		data.set(2).unwrap();
		assert_eq!(late_hits.get(), 1);
	}

	#[rstest]
	fn test_listener_removed_during_notification_still_runs_in_that_pass() {
		let data = Data::new(0);
		let hits = Rc::new(Cell::new(0));
		let victim: Rc<Cell<Option<Subscription>>> = Rc::new(Cell::new(None));

		let handle = data.clone();
		let target = victim.clone();
		data.listen(move |_| {
			if let Some(subscription) = target.get() {
				handle.unsubscribe(subscription);
			}
		});
		let counter = hits.clone();
		victim.set(Some(data.listen(move |_| counter.set(counter.get() + 1))));

		data.set(1).unwrap();
		assert_eq!(hits.get(), 1);

		data.set(2).unwrap();
		assert_eq!(hits.get(), 1);
	}

	#[rstest]
	fn test_with_borrows_without_clone() {
		let data = Data::new(vec![1, 2, 3]);
		let sum: i32 = data.with(|items| items.iter().sum());
		assert_eq!(sum, 6);
	}

	#[rstest]
	fn test_weak_data_upgrade() {
		let data = Data::new(1);
		let weak = data.downgrade();
		assert_eq!(weak.upgrade().map(|d| d.get()), Some(1));

		drop(data);
		assert!(weak.upgrade().is_none());
	}

	#[rstest]
	fn test_weak_data_unsubscribe() {
		let data = Data::new(0);
		let weak = data.downgrade();
		let subscription = data.listen(|_| {});

		assert!(weak.unsubscribe(subscription));
		assert!(!weak.unsubscribe(subscription));
		assert_eq!(data.listener_count(), 0);

		let orphan = data.listen(|_| {});
		drop(data);
		assert!(!weak.unsubscribe(orphan));
	}

	struct DetachOnDrop {
		data: WeakData<i32>,
		subscription: Subscription,
	}

	impl Drop for DetachOnDrop {
		fn drop(&mut self) {
			self.data.unsubscribe(self.subscription);
		}
	}

	#[rstest]
	fn test_unsubscribe_drops_listener_outside_borrow() {
		// Arrange
		let data = Data::new(0);
		let companion = data.listen(|_| {});
		let guard = DetachOnDrop {
			data: data.downgrade(),
			subscription: companion,
		};
		let owner = data.listen(move |_| {
			let _owned = &guard;
		});

		// Act
		let removed = data.unsubscribe(owner);

		// Assert
		assert!(removed);
		assert_eq!(data.listener_count(), 0);
	}

	#[rstest]
	fn test_default_and_from() {
		let data: Data<String> = Data::default();
		assert_eq!(data.get(), "");

		let data: Data<i32> = 7.into();
		assert_eq!(data.get(), 7);
	}

	#[rstest]
	fn test_debug_output() {
		let data = Data::new(5);
		data.listen(|_| {});
		assert_eq!(format!("{data:?}"), "Data { value: 5, listeners: 1 }");
	}
}
