//! Element builders, widgets and control-flow elements
//!
//! This module provides access to ux-pages: the host document, the element
//! builder, the widget constructors, `<ux-if>` / `<ux-for>` and the page-level
//! setters and getters.
//!
//! ## Example
//!
//! ```rust
//! use ux::pages::prelude::*;
//!
//! let names = Data::new(vec!["Ada", "Grace"]);
//! let list = ux_for(&names, |name, _| html::li().text(name).build());
//! display_element([list.clone()]);
//!
//! names.update(|names| names.push("Edsger")).unwrap();
//! assert_eq!(list.rendered_texts(), vec!["Ada", "Grace", "Edsger"]);
//! ```

// Re-export all ux-pages functionality
pub use ux_pages::*;
