use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiError {
	#[error("failed to create scope: {0}")]
	ScopeCreation(String),
	#[error("scope {0} has already been disposed")]
	Disposed(uuid::Uuid),
	#[error("no service of type `{0}` is registered")]
	NotRegistered(&'static str),
}

pub type DiResult<T> = Result<T, DiError>;
