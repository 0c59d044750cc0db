//! # Reinhardt Logging
//!
//! Named, level-filtered loggers that fan structured records out to handlers.
//!
//! Loggers are produced by a process-wide [`LoggerFactory`] (usually a
//! [`LoggingManager`]) that is built once at startup and passed explicitly to
//! the components that need it. Loggers are immutable after construction and
//! cheap to clone, so they can be handed to worker threads freely.
//!
//! ## Example
//!
//! ```
//! use reinhardt_logging::{LogLevel, LoggerFactory, LoggingConfig, LoggingManager};
//! use reinhardt_logging::handlers::MemoryHandler;
//!
//! let memory = MemoryHandler::new(LogLevel::Debug);
//! let manager = LoggingManager::empty(LoggingConfig::default()).with_handler(memory.clone());
//!
//! let logger = manager.get_logger("reinhardt.render");
//! logger
//!     .record(LogLevel::Warning, "input left unbound")
//!     .field("field", "subject")
//!     .emit();
//!
//! let records = memory.get_records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].extra["field"], "subject");
//! ```

pub mod config;
pub mod formatters;
pub mod handlers;
pub mod logger;

pub use config::{LoggerFactory, LoggingConfig, LoggingManager};
pub use handlers::{LogHandler, MemoryHandler, TracingHandler};
pub use logger::{LogLevel, LogRecord, Logger, ParseLevelError, RecordBuilder};
