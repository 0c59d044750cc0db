//! Dependency scopes

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type ServiceMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Services that live for a single call.
///
/// Cloning a `LocalScope` yields another handle to the same cache.
#[derive(Clone, Default)]
pub struct LocalScope {
	cache: Arc<RwLock<ServiceMap>>,
}

impl LocalScope {
	/// Creates a new LocalScope with an empty cache.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_di::LocalScope;
	///
	/// let scope = LocalScope::new();
	/// assert!(scope.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Retrieves a value by type. Returns `None` if no value of type `T` is
	/// cached.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_di::LocalScope;
	///
	/// let scope = LocalScope::new();
	/// scope.set(42i32);
	///
	/// assert_eq!(*scope.get::<i32>().unwrap(), 42);
	/// assert!(scope.get::<u8>().is_none());
	/// ```
	pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
		cache
			.get(&TypeId::of::<T>())
			.and_then(|arc| arc.clone().downcast::<T>().ok())
	}

	/// Stores a value, replacing any earlier value of the same type.
	pub fn set<T: Any + Send + Sync>(&self, value: T) {
		self.set_arc(Arc::new(value));
	}

	/// Stores a pre-wrapped `Arc<T>`.
	pub fn set_arc<T: Any + Send + Sync>(&self, value: Arc<T>) {
		let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
		cache.insert(TypeId::of::<T>(), value);
	}

	pub fn len(&self) -> usize {
		self.cache
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops every cached service.
	pub fn clear(&self) {
		self.cache
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.clear();
	}
}

/// Services registered once at startup and shared by every scope.
#[derive(Default)]
pub struct SingletonScope {
	cache: RwLock<ServiceMap>,
}

impl SingletonScope {
	/// Creates a new SingletonScope with an empty cache.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_di::SingletonScope;
	///
	/// let scope = SingletonScope::new();
	/// scope.set(100u64);
	///
	/// let val1 = scope.get::<u64>().unwrap();
	/// let val2 = scope.get::<u64>().unwrap();
	/// assert_eq!(*val1, *val2);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
		cache
			.get(&TypeId::of::<T>())
			.and_then(|arc| arc.clone().downcast::<T>().ok())
	}

	pub fn set<T: Any + Send + Sync>(&self, value: T) {
		self.set_arc(Arc::new(value));
	}

	pub fn set_arc<T: Any + Send + Sync>(&self, value: Arc<T>) {
		let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
		cache.insert(TypeId::of::<T>(), value);
	}

	pub fn contains<T: Any + Send + Sync>(&self) -> bool {
		self.cache
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.contains_key(&TypeId::of::<T>())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_local_scope_set_replaces_value() {
		let scope = LocalScope::new();
		scope.set(1i32);
		scope.set(2i32);
		assert_eq!(*scope.get::<i32>().unwrap(), 2);
		assert_eq!(scope.len(), 1);
	}

	#[rstest]
	fn test_local_scope_clones_share_cache() {
		let scope = LocalScope::new();
		let handle = scope.clone();
		handle.set("shared".to_string());
		assert_eq!(scope.get::<String>().unwrap().as_str(), "shared");
	}

	#[rstest]
	fn test_local_scope_clear() {
		let scope = LocalScope::new();
		scope.set(1u8);
		scope.set(2u16);
		scope.clear();
		assert!(scope.is_empty());
		assert!(scope.get::<u8>().is_none());
	}

	#[rstest]
	fn test_singleton_scope_set_arc_keeps_identity() {
		let scope = SingletonScope::new();
		let value = Arc::new(String::from("config"));
		scope.set_arc(Arc::clone(&value));
		assert!(Arc::ptr_eq(&scope.get::<String>().unwrap(), &value));
		assert!(scope.contains::<String>());
		assert!(!scope.contains::<u32>());
	}
}
