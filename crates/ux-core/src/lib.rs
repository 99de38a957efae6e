//! UX Core - Reactive data cell
//!
//! The core crate of the UX helpers. It provides [`Data<T>`], a single-value
//! container that synchronously notifies its listeners on every write, together
//! with the subscription handles used to detach those listeners again.
//!
//! ## Example
//!
//! ```
//! use ux_core::Data;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let name = Data::new(String::from("red"));
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let log = seen.clone();
//! let subscription = name.listen(move |value: &String| log.borrow_mut().push(value.clone()));
//!
//! name.set(String::from("blue")).unwrap();
//! assert_eq!(name.get(), "blue");
//! assert_eq!(*seen.borrow(), vec!["blue".to_string()]);
//!
//! assert!(name.unsubscribe(subscription));
//! name.set(String::from("green")).unwrap();
//! assert_eq!(seen.borrow().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod reactive;

pub use error::{ListenerError, ReactiveError};
pub use reactive::{Data, Subscription, WeakData};
