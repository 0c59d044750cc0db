//! Injection context for dependency resolution

use crate::error::{DiError, DiResult};
use crate::scope::{LocalScope, SingletonScope};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The resolution boundary of one scope: its own local services layered over
/// the shared singletons.
pub struct InjectionContext {
	id: uuid::Uuid,
	local: LocalScope,
	singleton: Arc<SingletonScope>,
	disposed: AtomicBool,
}

impl InjectionContext {
	/// Creates a new context over a shared singleton scope.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_di::{InjectionContext, SingletonScope};
	/// use std::sync::Arc;
	///
	/// let singleton = Arc::new(SingletonScope::new());
	/// singleton.set(100u64);
	///
	/// let ctx = InjectionContext::new(singleton);
	/// ctx.set_local(42i32);
	///
	/// assert_eq!(*ctx.resolve::<i32>().unwrap(), 42);
	/// assert_eq!(*ctx.resolve::<u64>().unwrap(), 100);
	/// ```
	pub fn new(singleton: Arc<SingletonScope>) -> Self {
		Self {
			id: uuid::Uuid::new_v4(),
			local: LocalScope::new(),
			singleton,
			disposed: AtomicBool::new(false),
		}
	}

	pub fn id(&self) -> uuid::Uuid {
		self.id
	}

	pub fn get_local<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.local.get::<T>()
	}

	pub fn set_local<T: Any + Send + Sync>(&self, value: T) {
		self.local.set(value);
	}

	pub fn get_singleton<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.singleton.get::<T>()
	}

	pub fn singleton_scope(&self) -> &Arc<SingletonScope> {
		&self.singleton
	}

	/// Resolves a service, preferring the local scope over singletons.
	/// A disposed context resolves nothing.
	pub fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		if self.is_disposed() {
			return None;
		}
		self.local
			.get::<T>()
			.or_else(|| self.singleton.get::<T>())
	}

	/// Like [`resolve`](Self::resolve), but reports why nothing was found.
	pub fn require<T: Any + Send + Sync>(&self) -> DiResult<Arc<T>> {
		if self.is_disposed() {
			return Err(DiError::Disposed(self.id));
		}
		self.resolve::<T>()
			.ok_or(DiError::NotRegistered(std::any::type_name::<T>()))
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed.load(Ordering::Acquire)
	}

	/// Clears local services and refuses further resolution. Returns `false`
	/// if the context had already been disposed.
	pub fn dispose(&self) -> bool {
		if self.disposed.swap(true, Ordering::AcqRel) {
			return false;
		}
		self.local.clear();
		true
	}
}

impl std::fmt::Debug for InjectionContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("InjectionContext")
			.field("id", &self.id)
			.field("local_services", &self.local.len())
			.field("disposed", &self.is_disposed())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_local_shadows_singleton() {
		let singleton = Arc::new(SingletonScope::new());
		singleton.set(String::from("global"));
		let ctx = InjectionContext::new(singleton);

		ctx.set_local(String::from("local"));

		assert_eq!(ctx.resolve::<String>().unwrap().as_str(), "local");
		assert_eq!(ctx.get_singleton::<String>().unwrap().as_str(), "global");
	}

	#[rstest]
	fn test_contexts_do_not_share_local_services() {
		let singleton = Arc::new(SingletonScope::new());
		let first = InjectionContext::new(Arc::clone(&singleton));
		let second = InjectionContext::new(singleton);

		first.set_local(1u32);

		assert!(second.resolve::<u32>().is_none());
		assert_ne!(first.id(), second.id());
	}

	#[rstest]
	fn test_require_reports_missing_service() {
		let ctx = InjectionContext::new(Arc::new(SingletonScope::new()));
		let err = ctx.require::<u32>().unwrap_err();
		assert_eq!(err, DiError::NotRegistered("u32"));
	}

	#[rstest]
	fn test_dispose_clears_and_blocks_resolution() {
		let singleton = Arc::new(SingletonScope::new());
		singleton.set(5u8);
		let ctx = InjectionContext::new(singleton);
		ctx.set_local(1u16);

		assert!(ctx.dispose());
		assert!(!ctx.dispose());
		assert!(ctx.is_disposed());
		assert!(ctx.resolve::<u8>().is_none());
		assert!(ctx.get_local::<u16>().is_none());
		assert_eq!(ctx.require::<u8>().unwrap_err(), DiError::Disposed(ctx.id()));
	}
}
