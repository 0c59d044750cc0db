use crate::handlers::{LogHandler, TracingHandler};
use crate::logger::{LogLevel, Logger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Produces named loggers.
///
/// Implementations are shared process-wide, so producing a logger must be
/// cheap and must not mutate shared state.
pub trait LoggerFactory: Send + Sync {
	fn get_logger(&self, name: &str) -> Logger;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	/// Minimum level for every logger produced by the manager.
	pub level: LogLevel,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: LogLevel::Info,
		}
	}
}

impl LoggingConfig {
	pub fn with_level(level: LogLevel) -> Self {
		Self { level }
	}
}

/// The default [`LoggerFactory`]: every logger it hands out shares the same
/// handler list and minimum level.
#[derive(Clone)]
pub struct LoggingManager {
	config: LoggingConfig,
	handlers: Arc<[Arc<dyn LogHandler>]>,
}

impl LoggingManager {
	/// Creates a manager that forwards records to `tracing`.
	pub fn new(config: LoggingConfig) -> Self {
		Self::empty(config).with_handler(TracingHandler::default())
	}

	/// Creates a manager without any handler attached.
	pub fn empty(config: LoggingConfig) -> Self {
		Self {
			config,
			handlers: Arc::from(Vec::new()),
		}
	}

	pub fn with_handler(self, handler: impl LogHandler + 'static) -> Self {
		let mut handlers: Vec<Arc<dyn LogHandler>> = self.handlers.iter().cloned().collect();
		handlers.push(Arc::new(handler));
		Self {
			handlers: Arc::from(handlers),
			..self
		}
	}

	pub fn config(&self) -> &LoggingConfig {
		&self.config
	}
}

impl Default for LoggingManager {
	fn default() -> Self {
		Self::new(LoggingConfig::default())
	}
}

impl LoggerFactory for LoggingManager {
	fn get_logger(&self, name: &str) -> Logger {
		Logger::from_parts(name, self.config.level, Arc::clone(&self.handlers))
	}
}

impl std::fmt::Debug for LoggingManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LoggingManager")
			.field("config", &self.config)
			.field("handlers", &self.handlers.len())
			.finish()
	}
}
