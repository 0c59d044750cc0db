use crate::error::ComponentError;
use reinhardt_di::{InjectionContext, SingletonScope};
use reinhardt_logging::{Logger, LoggerFactory, LoggingConfig, LoggingManager};
use std::any::Any;
use std::sync::Arc;

/// Per-call handle a component renders under.
///
/// Bound to the call's isolated [`InjectionContext`] and carrying the
/// process-wide logger factory. A context never outlives its call.
#[derive(Clone)]
pub struct RenderContext {
	component: &'static str,
	services: Arc<InjectionContext>,
	loggers: Arc<dyn LoggerFactory>,
}

impl RenderContext {
	pub fn new(
		component: &'static str,
		services: Arc<InjectionContext>,
		loggers: Arc<dyn LoggerFactory>,
	) -> Self {
		Self {
			component,
			services,
			loggers,
		}
	}

	/// A context with no registered services and no log handlers.
	pub fn detached(component: &'static str) -> Self {
		Self::new(
			component,
			Arc::new(InjectionContext::new(Arc::new(SingletonScope::new()))),
			Arc::new(LoggingManager::empty(LoggingConfig::default())),
		)
	}

	/// Name of the component being rendered.
	pub fn component_name(&self) -> &'static str {
		self.component
	}

	pub fn services(&self) -> &Arc<InjectionContext> {
		&self.services
	}

	/// Resolves a service from the call's scope.
	pub fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.services.resolve::<T>()
	}

	/// Resolves a service, failing the render when it is not registered.
	pub fn require<T: Any + Send + Sync>(&self) -> Result<Arc<T>, ComponentError> {
		Ok(self.services.require::<T>()?)
	}

	pub fn logger(&self, name: &str) -> Logger {
		self.loggers.get_logger(name)
	}

	pub fn logger_factory(&self) -> &Arc<dyn LoggerFactory> {
		&self.loggers
	}
}

impl std::fmt::Debug for RenderContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderContext")
			.field("component", &self.component)
			.field("services", &self.services)
			.finish_non_exhaustive()
	}
}
