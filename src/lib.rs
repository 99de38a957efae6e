//! # UX
//!
//! A minimal declarative UI helper library.
//!
//! UX builds element trees from plain function calls, wires reactive values into
//! attributes, and ships a handful of prebuilt widgets plus two control-flow
//! elements for conditional and list rendering. Everything runs synchronously:
//! writing a [`Data`] cell re-renders whatever depends on it before `set`
//! returns.
//!
//! ## Core Principles
//!
//! - **Explicit over magic**: no scheduler, no batching, no diffing
//! - **Tagged attributes**: literals, reactive cells and handlers are distinct variants
//! - **Owned registries**: custom elements are registered per document, on demand
//!
//! ## Crates
//!
//! - [`core`] (`ux-core`): the reactive [`Data`] cell
//! - [`pages`] (`ux-pages`): host document, builders, widgets, control flow
//!
//! ## Feature Flags
//!
//! - `debug-hooks` - emit `debug_log!` diagnostics in debug builds
//!
//! ## Quick Example
//!
//! ```rust
//! use ux::prelude::*;
//!
//! let online = Data::new(false);
//! let status = ux_if(false, "online", "offline");
//! status.bind(&online);
//!
//! let color = Data::new("grey");
//! let badge = html::span().reactive_attr("data-color", &color).child(status.clone()).build();
//! display_element([badge.clone()]);
//!
//! online.set(true).unwrap();
//! color.set("green").unwrap();
//! assert_eq!(status.visible_text(), "online");
//! assert_eq!(badge.get_attribute("data-color").as_deref(), Some("green"));
//! ```

pub mod core;
pub mod pages;

pub use ux_core::{Data, ListenerError, ReactiveError, Subscription};
pub use ux_pages::{Document, Element, Node, display_element, document};

/// Re-export common types for convenience
pub mod prelude {
	pub use ux_pages::prelude::*;
}
