//! Prelude module for convenient imports
//!
//! ```
//! use ux_pages::prelude::*;
//! ```
//!
//! Tag builders are reachable through the `html` module (`html::div()`), since
//! several of them share a name with a widget.

pub use crate::builder::html;
pub use crate::builder::{AttrValue, Attributes, Child, ElementBuilder, create_element, on};
pub use crate::config::UxConfig;
pub use crate::control_flow::{ForElement, IfElement, ux_for, ux_for_text, ux_if};
pub use crate::dom::{Document, Element, Event, EventHandle, Node, display_element, document};
pub use crate::error::{ConfigError, DomError};
pub use crate::head::{css, favicon, meta, set_favicon, set_meta, set_title, src_css, title};
pub use crate::widgets::{HeadingLevel, a, button, button_with_children, container, heading, image, input, link};
pub use crate::{attrs, children};
pub use ux_core::{Data, ListenerError, ReactiveError, Subscription};
