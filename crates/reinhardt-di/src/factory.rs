//! Scope creation and guaranteed release.

use crate::context::InjectionContext;
use crate::error::DiResult;
use crate::scope::SingletonScope;
use std::sync::Arc;

/// An isolated, disposable resolution context.
pub trait ServiceScope: Send + Sync {
	fn id(&self) -> uuid::Uuid;

	/// The context services are resolved from while the scope is alive.
	fn context(&self) -> Arc<InjectionContext>;

	/// Releases the scope's services. Called exactly once by [`ScopeGuard`].
	fn dispose(&mut self);
}

/// Produces a fresh [`ServiceScope`] per call.
pub trait ScopeFactory: Send + Sync {
	fn create_scope(&self) -> DiResult<Box<dyn ServiceScope>>;
}

/// The default factory: each scope gets its own local cache over the
/// factory's shared singletons.
#[derive(Clone, Default)]
pub struct DefaultScopeFactory {
	singletons: Arc<SingletonScope>,
}

impl DefaultScopeFactory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_singletons(singletons: Arc<SingletonScope>) -> Self {
		Self { singletons }
	}

	/// The singleton scope shared by every scope this factory creates.
	/// Register process-wide services here at startup.
	pub fn singletons(&self) -> &Arc<SingletonScope> {
		&self.singletons
	}
}

impl ScopeFactory for DefaultScopeFactory {
	fn create_scope(&self) -> DiResult<Box<dyn ServiceScope>> {
		let context = Arc::new(InjectionContext::new(Arc::clone(&self.singletons)));
		tracing::trace!(scope = %context.id(), "scope created");
		Ok(Box::new(DefaultScope { context }))
	}
}

struct DefaultScope {
	context: Arc<InjectionContext>,
}

impl ServiceScope for DefaultScope {
	fn id(&self) -> uuid::Uuid {
		self.context.id()
	}

	fn context(&self) -> Arc<InjectionContext> {
		Arc::clone(&self.context)
	}

	fn dispose(&mut self) {
		if self.context.dispose() {
			tracing::trace!(scope = %self.context.id(), "scope disposed");
		}
	}
}

/// Owns a scope for the duration of one call and disposes it when dropped.
///
/// Dropping covers every way a call can end: normal return, an early error
/// return, a panic unwinding through the owner, or the owning future being
/// dropped mid-await.
pub struct ScopeGuard {
	scope: Option<Box<dyn ServiceScope>>,
	context: Arc<InjectionContext>,
}

impl ScopeGuard {
	pub fn acquire(factory: &dyn ScopeFactory) -> DiResult<Self> {
		let scope = factory.create_scope()?;
		let context = scope.context();
		Ok(Self {
			scope: Some(scope),
			context,
		})
	}

	pub fn id(&self) -> uuid::Uuid {
		self.context.id()
	}

	pub fn context(&self) -> Arc<InjectionContext> {
		Arc::clone(&self.context)
	}
}

impl Drop for ScopeGuard {
	fn drop(&mut self) {
		if let Some(mut scope) = self.scope.take() {
			scope.dispose();
		}
	}
}

impl std::fmt::Debug for ScopeGuard {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScopeGuard")
			.field("id", &self.id())
			.field("released", &self.scope.is_none())
			.finish()
	}
}
