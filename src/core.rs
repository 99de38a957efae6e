//! Reactive data cells.
//!
//! This module provides access to [`Data`], the single-value container that
//! notifies its listeners synchronously on every write.
//!
//! # Examples
//!
//! ```rust
//! use ux::core::{Data, ListenerError};
//!
//! let stock = Data::new(3u32);
//! stock.try_listen(|n| if *n > 10 { Err(ListenerError::new("too many")) } else { Ok(()) });
//!
//! assert!(stock.set(5).is_ok());
//! assert!(stock.set(11).is_err());
//! assert_eq!(stock.get(), 11);
//! ```

pub use ux_core::*;
