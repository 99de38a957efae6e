//! UX Pages - declarative UI helpers
//!
//! Element builders, prebuilt widgets and two control-flow custom elements on
//! top of an in-memory host document.
//!
//! ## Architecture
//!
//! - [`dom`]: host document, nodes, elements, events, custom element registry
//! - [`builder`]: `create_element` and the fluent [`ElementBuilder`](builder::ElementBuilder)
//! - [`widgets`]: `button`, `input`, `link`, `image`, `container`, `heading`
//! - [`control_flow`]: `<ux-if>` and `<ux-for>`
//! - [`head`]: title, meta, favicon and stylesheet setters/getters
//! - [`config`]: default widget styles, loadable from JSON or TOML
//!
//! Reactive values come from [`ux_core::Data`], re-exported here.
//!
//! ## Example
//!
//! ```
//! use ux_pages::prelude::*;
//!
//! let count = Data::new(0);
//! let counter = count.clone();
//! let items = Data::new(vec!["a", "b"]);
//!
//! display_element([
//! 	Node::from(heading(1, "Counter", attrs! {})),
//! 	button("+1", move |_| { let _ = counter.update(|n| *n += 1); }, attrs! {}).into(),
//! 	ux_if(true, "ready", "waiting").into(),
//! 	ux_for_text(&items).into(),
//! ]);
//!
//! let go = document().find_element(|el| el.tag_name() == "button").unwrap();
//! go.click();
//! assert_eq!(count.get(), 1);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod control_flow;
pub mod dom;
pub mod error;
pub mod head;
pub mod logging;
pub mod prelude;
pub mod widgets;

#[cfg(test)]
mod testing;

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}

pub use config::UxConfig;
pub use dom::{Document, Element, Node, display_element, document};
pub use error::{ConfigError, DomError};
pub use ux_core::{Data, ListenerError, ReactiveError, Subscription, WeakData};
