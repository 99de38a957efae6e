//! Configuration for widget defaults
//!
//! [`UxConfig`] carries the default inline styles the widget constructors apply
//! before the caller's own options. Every field has a default, so a config file
//! only lists what it changes:
//!
//! ```toml
//! [styles]
//! button = "padding: 1em; background: rebeccapurple;"
//! ```
//!
//! A [`Document`](crate::dom::Document) owns one config; build a document with
//! [`Document::with_config`](crate::dom::Document::with_config) to use another.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UxConfig {
	/// Default inline styles of the widget constructors.
	pub styles: WidgetStyles,
}

/// Default inline style per widget constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStyles {
	/// Style of [`button`](crate::widgets::button).
	pub button: String,
	/// Style of [`input`](crate::widgets::input).
	pub input: String,
	/// Style of [`link`](crate::widgets::link).
	pub link: String,
	/// Style of [`image`](crate::widgets::image).
	pub image: String,
	/// Style of [`container`](crate::widgets::container).
	pub container: String,
	/// Style of [`heading`](crate::widgets::heading).
	pub heading: String,
}

impl Default for WidgetStyles {
	fn default() -> Self {
		Self {
			button: "padding: 0.5em 1em;  background: #333; color: white; border: none; border-radius: 4px; cursor: pointer;".to_string(),
			input: "padding: 0.5em; border: 1px solid #ccc; border-radius: 4px; width: 100%;"
				.to_string(),
			link: "color: blue; text-decoration: none;".to_string(),
			image: "max-width: 100%; height: auto;".to_string(),
			container: "margin: 1em 0;".to_string(),
			heading: "margin: 0.5em 0;".to_string(),
		}
	}
}

impl UxConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a JSON document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Json`] when the source is not valid JSON or has
	/// fields of the wrong type.
	pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(source)?)
	}

	/// Parses a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] when the source is not valid TOML or has
	/// fields of the wrong type.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Loads a `.json` or `.toml` file.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Io`] when the file cannot be read,
	/// [`ConfigError::UnsupportedFormat`] for any other extension, and the
	/// parse error of the matching format otherwise.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase);
		match extension.as_deref() {
			Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
			Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?),
			_ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
		}
	}

	/// Sets the default button style.
	pub fn button_style(mut self, style: impl Into<String>) -> Self {
		self.styles.button = style.into();
		self
	}

	/// Sets the default heading style.
	pub fn heading_style(mut self, style: impl Into<String>) -> Self {
		self.styles.heading = style.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write as _;

	#[rstest]
	fn test_default_styles() {
		let config = UxConfig::default();
		assert_eq!(config.styles.link, "color: blue; text-decoration: none;");
		assert_eq!(config.styles.container, "margin: 1em 0;");
		assert!(config.styles.button.starts_with("padding: 0.5em 1em;"));
	}

	#[rstest]
	fn test_partial_json_keeps_defaults() {
		let config = UxConfig::from_json_str(r#"{"styles": {"link": "color: red;"}}"#).unwrap();
		assert_eq!(config.styles.link, "color: red;");
		assert_eq!(config.styles.image, WidgetStyles::default().image);
	}

	#[rstest]
	fn test_empty_sources_are_default() {
		assert_eq!(UxConfig::from_json_str("{}").unwrap(), UxConfig::default());
		assert_eq!(UxConfig::from_toml_str("").unwrap(), UxConfig::default());
	}

	#[rstest]
	fn test_toml_source() {
		let config = UxConfig::from_toml_str(
			r#"
			[styles]
			heading = "margin: 0;"
			"#,
		)
		.unwrap();
		assert_eq!(config.styles.heading, "margin: 0;");
		assert_eq!(config.styles.button, WidgetStyles::default().button);
	}

	#[rstest]
	fn test_invalid_json() {
		let err = UxConfig::from_json_str(r#"{"styles": {"link": 3}}"#).unwrap_err();
		assert!(matches!(err, ConfigError::Json(_)));
	}

	#[rstest]
	#[case("ux.json", r#"{"styles": {"container": "margin: 0;"}}"#)]
	#[case("ux.toml", "[styles]\ncontainer = \"margin: 0;\"\n")]
	fn test_from_file(#[case] name: &str, #[case] contents: &str) {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(name);
		let mut file = std::fs::File::create(&path).unwrap();
		file.write_all(contents.as_bytes()).unwrap();

		let config = UxConfig::from_file(&path).unwrap();

		assert_eq!(config.styles.container, "margin: 0;");
	}

	#[rstest]
	fn test_from_file_unsupported_extension() {
		let err = UxConfig::from_file("ux.yaml").unwrap_err();
		assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
	}

	#[rstest]
	fn test_builder_methods() {
		let config = UxConfig::new().button_style("a").heading_style("b");
		assert_eq!(config.styles.button, "a");
		assert_eq!(config.styles.heading, "b");
	}
}
