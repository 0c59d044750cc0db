//! Failure values returned by render calls.

use reinhardt_di::DiError;
use reinhardt_pages::{ComponentError, ParameterError};
use std::fmt;
use thiserror::Error;

/// The model could not be reflected into fields.
#[derive(Debug, Error)]
pub enum BindingError {
	#[error("failed to read fields of model `{model}`: {source}")]
	Reflection {
		model: &'static str,
		#[source]
		source: serde_json::Error,
	},
}

/// What went wrong inside a render pass.
#[derive(Debug, Error)]
pub enum RenderCause {
	#[error(transparent)]
	Component(#[from] ComponentError),
	#[error(transparent)]
	Parameters(#[from] ParameterError),
	#[error("render panicked: {0}")]
	Panic(String),
	#[error("render worker failed: {0}")]
	Worker(String),
	#[error(transparent)]
	Scope(#[from] DiError),
}

/// When a cancelled call noticed the cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
	/// Cancelled before any scope was created or work dispatched.
	BeforeDispatch,
	/// Cancelled while the render worker was running.
	DuringRender,
	/// The configured render timeout elapsed.
	TimedOut,
}

impl fmt::Display for CancelReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			CancelReason::BeforeDispatch => "cancelled before dispatch",
			CancelReason::DuringRender => "cancelled during render",
			CancelReason::TimedOut => "render timed out",
		})
	}
}

#[derive(Debug, Error)]
pub enum RenderError {
	#[error("binding parameters for `{component}` failed: {source}")]
	Binding {
		component: &'static str,
		#[source]
		source: BindingError,
	},
	#[error("component `{component}` failed to render: {source}")]
	Render {
		component: &'static str,
		#[source]
		source: RenderCause,
	},
	#[error("component `{component}` rendered no markup")]
	EmptyResult { component: &'static str },
	#[error("rendering `{component}` was cancelled: {reason}")]
	Cancelled {
		component: &'static str,
		reason: CancelReason,
	},
}

impl RenderError {
	/// Name of the component the failed call targeted.
	pub fn component(&self) -> &'static str {
		match self {
			RenderError::Binding { component, .. }
			| RenderError::Render { component, .. }
			| RenderError::EmptyResult { component }
			| RenderError::Cancelled { component, .. } => component,
		}
	}

	pub fn is_cancelled(&self) -> bool {
		matches!(self, RenderError::Cancelled { .. })
	}
}

/// The result of one render call.
pub type RenderOutcome = Result<String, RenderError>;
