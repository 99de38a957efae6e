//! Element Builder API
//!
//! Two ways to build the same elements:
//!
//! - [`create_element`]: tag, an [`Attributes`] map and a list of [`Child`]ren
//! - [`ElementBuilder`]: a fluent chain started from one function per tag
//!   (`div()`, `p()`, `button()`, ...)
//!
//! Elements are created in the thread's global [`Document`](crate::dom::Document)
//! and returned unattached; hand them to
//! [`display_element`](crate::dom::display_element) to show them.
//!
//! ## Example
//!
//! ```
//! use ux_core::Data;
//! use ux_pages::builder::html::{div, p};
//!
//! let count = Data::new(0);
//! let el = div()
//! 	.class("counter")
//! 	.reactive_attr("data-count", &count)
//! 	.child(p().text("Clicks").build())
//! 	.build();
//!
//! count.set(1).unwrap();
//! assert_eq!(el.to_html(), r#"<div class="counter" data-count="1"><p>Clicks</p></div>"#);
//! ```

pub mod attributes;
pub mod html;

// Re-exports for convenience
pub use attributes::{AttrValue, AttributeSource, Attributes, on};
pub use html::{Child, ElementBuilder, create_element};
