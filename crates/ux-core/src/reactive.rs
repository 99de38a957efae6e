//! Reactive primitives
//!
//! - [`Data<T>`]: a value plus an ordered list of change listeners
//! - [`Subscription`]: handle returned by [`Data::listen`], used to detach a listener
//! - [`WeakData<T>`]: non-owning handle, for consumers that must not keep a cell alive

pub mod data;
pub mod subscription;

pub use data::{Data, WeakData};
pub use subscription::Subscription;
