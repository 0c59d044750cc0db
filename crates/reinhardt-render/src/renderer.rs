//! One isolated render pass per call.

use crate::error::{CancelReason, RenderCause, RenderError, RenderOutcome};
use crate::settings::RenderSettings;
use async_trait::async_trait;
use reinhardt_di::{ScopeFactory, ScopeGuard};
use reinhardt_logging::{LogLevel, Logger, LoggerFactory};
use reinhardt_pages::{
	BindableComponent, BoundParameterSet, DocumentWriter, RenderContext, RenderEngine,
};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

/// Renders a component type from bound parameters.
#[async_trait]
pub trait RenderComponent: Send + Sync {
	async fn render<C: BindableComponent>(
		&self,
		parameters: BoundParameterSet,
		cancel: &CancellationToken,
	) -> RenderOutcome;
}

/// The default [`RenderComponent`].
///
/// Each call gets its own scope from the [`ScopeFactory`] and its own blocking
/// worker, on which the component is constructed, parameterized, rendered
/// once and serialized. The scope is released when the call returns, however
/// it returns.
#[derive(Clone)]
pub struct ComponentRenderer {
	engine: Arc<dyn RenderEngine>,
	scopes: Arc<dyn ScopeFactory>,
	loggers: Arc<dyn LoggerFactory>,
	logger: Logger,
	timeout: Option<Duration>,
	document: Option<DocumentWriter>,
}

impl ComponentRenderer {
	pub fn new(
		engine: Arc<dyn RenderEngine>,
		scopes: Arc<dyn ScopeFactory>,
		loggers: Arc<dyn LoggerFactory>,
	) -> Self {
		let logger = loggers.get_logger("reinhardt.render.renderer");
		Self {
			engine,
			scopes,
			loggers,
			logger,
			timeout: None,
			document: None,
		}
	}

	/// Applies the timeout and output mode from `settings`.
	pub fn from_settings(
		settings: &RenderSettings,
		engine: Arc<dyn RenderEngine>,
		scopes: Arc<dyn ScopeFactory>,
		loggers: Arc<dyn LoggerFactory>,
	) -> Self {
		let mut renderer = Self::new(engine, scopes, loggers);
		renderer.timeout = settings.render_timeout();
		renderer.document = settings.document_writer();
		renderer
	}

	/// Gives up on renders that take longer than `timeout`.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Wraps every rendered fragment in a full document.
	pub fn with_document(mut self, writer: DocumentWriter) -> Self {
		self.document = Some(writer);
		self
	}

	fn fail(&self, component: &'static str, source: RenderCause) -> RenderError {
		self.logger
			.record(LogLevel::Error, "component render failed")
			.field("component", component)
			.display("error", &source)
			.emit();
		RenderError::Render { component, source }
	}

	fn cancelled(&self, component: &'static str, reason: CancelReason) -> RenderError {
		self.logger
			.record(LogLevel::Warning, "component render cancelled")
			.field("component", component)
			.display("reason", reason)
			.emit();
		RenderError::Cancelled { component, reason }
	}
}

#[async_trait]
impl RenderComponent for ComponentRenderer {
	async fn render<C: BindableComponent>(
		&self,
		parameters: BoundParameterSet,
		cancel: &CancellationToken,
	) -> RenderOutcome {
		let component = C::name();
		if cancel.is_cancelled() {
			return Err(self.cancelled(component, CancelReason::BeforeDispatch));
		}

		let scope = ScopeGuard::acquire(self.scopes.as_ref())
			.map_err(|e| self.fail(component, RenderCause::Scope(e)))?;
		let cx = RenderContext::new(component, scope.context(), Arc::clone(&self.loggers));
		let engine = Arc::clone(&self.engine);

		let worker =
			tokio::task::spawn_blocking(move || render_on_worker::<C>(engine.as_ref(), &parameters, &cx));

		let markup = tokio::select! {
			biased;
			_ = cancel.cancelled() => {
				return Err(self.cancelled(component, CancelReason::DuringRender));
			}
			_ = deadline(self.timeout) => {
				return Err(self.cancelled(component, CancelReason::TimedOut));
			}
			joined = worker => match joined {
				Ok(Ok(markup)) => markup,
				Ok(Err(cause)) => return Err(self.fail(component, cause)),
				Err(e) => return Err(self.fail(component, join_error_cause(e))),
			},
		};
		drop(scope);

		if markup.trim().is_empty() {
			self.logger
				.record(LogLevel::Error, "component rendered no markup")
				.field("component", component)
				.emit();
			return Err(RenderError::EmptyResult { component });
		}

		Ok(match &self.document {
			Some(writer) => writer.wrap(&markup),
			None => markup,
		})
	}
}

impl std::fmt::Debug for ComponentRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentRenderer")
			.field("timeout", &self.timeout)
			.field("document", &self.document)
			.finish_non_exhaustive()
	}
}

/// Runs on the call's blocking worker.
fn render_on_worker<C: BindableComponent>(
	engine: &dyn RenderEngine,
	parameters: &BoundParameterSet,
	cx: &RenderContext,
) -> Result<String, RenderCause> {
	let mut component = C::default();
	component.set_parameters(parameters)?;
	let page = engine.render_once(&component, cx)?;
	Ok(engine.serialize(&page))
}

async fn deadline(timeout: Option<Duration>) {
	match timeout {
		Some(timeout) => tokio::time::sleep(timeout).await,
		None => std::future::pending().await,
	}
}

fn join_error_cause(err: JoinError) -> RenderCause {
	if err.is_panic() {
		RenderCause::Panic(panic_message(err.into_panic()))
	} else {
		RenderCause::Worker(err.to_string())
	}
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"non-string panic payload".to_string()
	}
}
