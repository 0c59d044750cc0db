use crate::formatters::{escape_control_chars, format_extra};
use crate::logger::{LogLevel, LogRecord};
use std::sync::{Arc, Mutex};

/// A sink for log records.
///
/// Handlers are called synchronously from whichever thread logged the record,
/// including render worker threads, so implementations must be `Send + Sync`.
pub trait LogHandler: Send + Sync {
	fn handle(&self, record: &LogRecord);
	fn level(&self) -> LogLevel;
}

/// Forwards records to `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingHandler {
	level: LogLevel,
}

impl TracingHandler {
	pub fn new(level: LogLevel) -> Self {
		Self { level }
	}
}

impl Default for TracingHandler {
	fn default() -> Self {
		Self::new(LogLevel::Debug)
	}
}

impl LogHandler for TracingHandler {
	fn handle(&self, record: &LogRecord) {
		let message = escape_control_chars(&record.message);
		let fields = format_extra(&record.extra);
		match record.level {
			LogLevel::Debug => {
				tracing::debug!(logger = %record.logger_name, fields = %fields, "{}", message)
			}
			LogLevel::Info => {
				tracing::info!(logger = %record.logger_name, fields = %fields, "{}", message)
			}
			LogLevel::Warning => {
				tracing::warn!(logger = %record.logger_name, fields = %fields, "{}", message)
			}
			LogLevel::Error => {
				tracing::error!(logger = %record.logger_name, fields = %fields, "{}", message)
			}
		}
	}

	fn level(&self) -> LogLevel {
		self.level
	}
}

/// Keeps records in memory. Clones share the same buffer.
#[derive(Clone)]
pub struct MemoryHandler {
	level: LogLevel,
	records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryHandler {
	pub fn new(level: LogLevel) -> Self {
		Self {
			level,
			records: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn get_records(&self) -> Vec<LogRecord> {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	/// Returns the records at exactly `level`.
	pub fn records_at(&self, level: LogLevel) -> Vec<LogRecord> {
		self.get_records()
			.into_iter()
			.filter(|record| record.level == level)
			.collect()
	}

	pub fn clear(&self) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clear();
	}
}

impl LogHandler for MemoryHandler {
	fn handle(&self, record: &LogRecord) {
		if record.level >= self.level {
			self.records
				.lock()
				.unwrap_or_else(|e| e.into_inner())
				.push(record.clone());
		}
	}

	fn level(&self) -> LogLevel {
		self.level
	}
}
