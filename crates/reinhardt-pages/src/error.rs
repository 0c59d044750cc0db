use reinhardt_di::DiError;
use thiserror::Error;

/// Failure raised by a component while it renders.
#[derive(Debug, Error)]
pub enum ComponentError {
	#[error("{0}")]
	Message(String),
	#[error(transparent)]
	Parameters(#[from] ParameterError),
	#[error(transparent)]
	Service(#[from] DiError),
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ComponentError {
	pub fn msg(message: impl Into<String>) -> Self {
		Self::Message(message.into())
	}
}

/// Failure converting a bound parameter into the type a component field
/// expects.
#[derive(Debug, Error)]
pub enum ParameterError {
	#[error("parameter `{name}` could not be converted to `{expected}`: {source}")]
	Conversion {
		name: String,
		expected: &'static str,
		#[source]
		source: serde_json::Error,
	},
	#[error("required parameter `{name}` was not bound")]
	Missing { name: String },
}
