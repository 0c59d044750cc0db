use crate::handlers::LogHandler;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Debug,
	Info,
	#[serde(alias = "warn")]
	Warning,
	Error,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Debug => "debug",
			LogLevel::Info => "info",
			LogLevel::Warning => "warning",
			LogLevel::Error => "error",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
	type Err = ParseLevelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"debug" => Ok(LogLevel::Debug),
			"info" => Ok(LogLevel::Info),
			"warn" | "warning" => Ok(LogLevel::Warning),
			"error" => Ok(LogLevel::Error),
			_ => Err(ParseLevelError(s.to_string())),
		}
	}
}

/// A single structured log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
	pub level: LogLevel,
	pub logger_name: String,
	pub message: String,
	pub extra: BTreeMap<String, serde_json::Value>,
}

impl LogRecord {
	pub fn new(level: LogLevel, logger_name: String, message: String) -> Self {
		Self {
			level,
			logger_name,
			message,
			extra: BTreeMap::new(),
		}
	}

	/// Returns a structured field as a string slice, if it holds a string.
	pub fn field_str(&self, key: &str) -> Option<&str> {
		self.extra.get(key).and_then(serde_json::Value::as_str)
	}
}

/// A named logger.
///
/// The level and handler list are fixed when the logger is built, so logging
/// never takes a lock on the logger itself.
#[derive(Clone)]
pub struct Logger {
	name: Arc<str>,
	level: LogLevel,
	handlers: Arc<[Arc<dyn LogHandler>]>,
}

impl Logger {
	/// Creates a logger with no handlers that accepts every level.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: Arc::from(name.into()),
			level: LogLevel::Debug,
			handlers: Arc::from(Vec::new()),
		}
	}

	pub(crate) fn from_parts(
		name: &str,
		level: LogLevel,
		handlers: Arc<[Arc<dyn LogHandler>]>,
	) -> Self {
		Self {
			name: Arc::from(name),
			level,
			handlers,
		}
	}

	/// Returns a copy of this logger that also writes to `handler`.
	pub fn with_handler(self, handler: impl LogHandler + 'static) -> Self {
		let mut handlers: Vec<Arc<dyn LogHandler>> = self.handlers.iter().cloned().collect();
		handlers.push(Arc::new(handler));
		Self {
			handlers: Arc::from(handlers),
			..self
		}
	}

	/// Returns a copy of this logger with a different minimum level.
	pub fn with_level(self, level: LogLevel) -> Self {
		Self { level, ..self }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn level(&self) -> LogLevel {
		self.level
	}

	pub fn is_enabled(&self, level: LogLevel) -> bool {
		level >= self.level && !self.handlers.is_empty()
	}

	/// Starts a structured record at `level`. Nothing is written until
	/// [`RecordBuilder::emit`] is called.
	pub fn record(&self, level: LogLevel, message: impl Into<String>) -> RecordBuilder<'_> {
		RecordBuilder {
			logger: self,
			record: LogRecord::new(level, self.name.to_string(), message.into()),
		}
	}

	pub fn log_record(&self, record: &LogRecord) {
		if !self.is_enabled(record.level) {
			return;
		}
		for handler in self.handlers.iter() {
			if record.level >= handler.level() {
				handler.handle(record);
			}
		}
	}

	pub fn debug(&self, message: impl Into<String>) {
		self.record(LogLevel::Debug, message).emit();
	}

	pub fn info(&self, message: impl Into<String>) {
		self.record(LogLevel::Info, message).emit();
	}

	pub fn warning(&self, message: impl Into<String>) {
		self.record(LogLevel::Warning, message).emit();
	}

	pub fn error(&self, message: impl Into<String>) {
		self.record(LogLevel::Error, message).emit();
	}
}

impl fmt::Debug for Logger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Logger")
			.field("name", &self.name)
			.field("level", &self.level)
			.field("handlers", &self.handlers.len())
			.finish()
	}
}

/// Builder for a record with structured fields.
#[must_use = "a record is only written when `emit` is called"]
pub struct RecordBuilder<'a> {
	logger: &'a Logger,
	record: LogRecord,
}

impl RecordBuilder<'_> {
	/// Attaches a structured field to the record.
	pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		self.record.extra.insert(key.into(), value.into());
		self
	}

	/// Attaches a field rendered through its `Display` impl.
	pub fn display(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
		self.field(key, value.to_string())
	}

	pub fn emit(self) {
		self.logger.log_record(&self.record);
	}
}
