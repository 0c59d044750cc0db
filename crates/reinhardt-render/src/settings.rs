//! Render settings
//!
//! Settings can be built in code or loaded from a TOML file. Every field has
//! a default, so an empty file is valid.

use reinhardt_logging::LogLevel;
use reinhardt_pages::{DocumentOptions, DocumentWriter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// What a successful render returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
	/// The component's markup as-is.
	#[default]
	Fragment,
	/// The markup wrapped in a complete HTML document.
	Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
	#[serde(default)]
	pub output: OutputMode,

	/// `lang` attribute of document output
	#[serde(default = "default_lang")]
	pub lang: String,

	/// Collapse whitespace in document output
	#[serde(default)]
	pub minify: bool,

	/// Per-call render deadline in milliseconds
	#[serde(default)]
	pub render_timeout_ms: Option<u64>,

	/// Minimum level of the default logging manager
	#[serde(default = "default_log_level")]
	pub log_level: LogLevel,
}

fn default_lang() -> String {
	"en".to_string()
}

fn default_log_level() -> LogLevel {
	LogLevel::Warning
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			output: OutputMode::default(),
			lang: default_lang(),
			minify: false,
			render_timeout_ms: None,
			log_level: default_log_level(),
		}
	}
}

impl RenderSettings {
	/// Parses settings from TOML and validates them.
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		let settings: RenderSettings = toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;
		Self::from_toml_str(&contents)
	}

	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.render_timeout_ms == Some(0) {
			return Err(SettingsError::ValidationError(
				"render_timeout_ms must be greater than zero".to_string(),
			));
		}
		if self.lang.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"lang must not be empty".to_string(),
			));
		}
		Ok(())
	}

	pub fn render_timeout(&self) -> Option<Duration> {
		self.render_timeout_ms.map(Duration::from_millis)
	}

	/// The document writer for [`OutputMode::Document`], or `None` for
	/// fragment output.
	pub fn document_writer(&self) -> Option<DocumentWriter> {
		match self.output {
			OutputMode::Fragment => None,
			OutputMode::Document => {
				let mut options = DocumentOptions::new().lang(self.lang.clone());
				options.minify = self.minify;
				Some(DocumentWriter::new(options))
			}
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_toml_uses_defaults() {
		let settings = RenderSettings::from_toml_str("").unwrap();
		assert_eq!(settings, RenderSettings::default());
		assert_eq!(settings.output, OutputMode::Fragment);
		assert_eq!(settings.log_level, LogLevel::Warning);
		assert!(settings.render_timeout().is_none());
		assert!(settings.document_writer().is_none());
	}

	#[rstest]
	fn test_full_toml() {
		let settings = RenderSettings::from_toml_str(
			r#"
			output = "document"
			lang = "de"
			minify = true
			render_timeout_ms = 250
			log_level = "debug"
			"#,
		)
		.unwrap();

		assert_eq!(settings.output, OutputMode::Document);
		assert_eq!(settings.render_timeout(), Some(Duration::from_millis(250)));
		assert_eq!(settings.log_level, LogLevel::Debug);

		let writer = settings.document_writer().unwrap();
		assert_eq!(writer.options().lang, "de");
		assert!(writer.options().minify);
	}

	#[rstest]
	#[case("render_timeout_ms = 0", "render_timeout_ms")]
	#[case("lang = \" \"", "lang")]
	#[case("output = \"pdf\"", "TOML parse error")]
	fn test_invalid_settings(#[case] contents: &str, #[case] needle: &str) {
		let err = RenderSettings::from_toml_str(contents).unwrap_err();
		assert!(err.to_string().contains(needle), "{err}");
	}

	#[rstest]
	fn test_missing_file() {
		let err = RenderSettings::from_file("/nonexistent/render.toml").unwrap_err();
		assert!(matches!(err, SettingsError::FileError(_)));
	}
}
