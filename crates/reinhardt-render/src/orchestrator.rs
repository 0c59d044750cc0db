//! The public entry point: bind, then render.

use crate::binder::ParameterBinder;
use crate::error::{RenderError, RenderOutcome};
use crate::renderer::{ComponentRenderer, RenderComponent};
use crate::settings::RenderSettings;
use reinhardt_di::{DefaultScopeFactory, ScopeFactory};
use reinhardt_logging::{LoggerFactory, LoggingConfig, LoggingManager};
use reinhardt_pages::{BindableComponent, RenderEngine, SsrEngine};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Renders a model through a component in two steps.
///
/// Binding comes first; if it fails the renderer is never invoked. Otherwise
/// the renderer's outcome is returned unchanged. The orchestrator holds no
/// per-call state and can be shared between concurrent calls.
///
/// # Example
///
/// ```
/// use reinhardt_pages::{
///     BindableComponent, BoundParameterSet, Component, ComponentDescriptor, ComponentError,
///     IntoPage, Page, PageElement, ParameterError, RenderContext,
/// };
/// use reinhardt_render::{RenderOrchestrator, RenderSettings};
/// use serde::Serialize;
/// use tokio_util::sync::CancellationToken;
///
/// #[derive(Serialize)]
/// struct Welcome {
///     user: String,
/// }
///
/// #[derive(Default)]
/// struct WelcomeMail {
///     user: String,
/// }
///
/// impl Component for WelcomeMail {
///     fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
///         Ok(PageElement::new("p").child(format!("Welcome, {}", self.user)).into_page())
///     }
///
///     fn name() -> &'static str {
///         "WelcomeMail"
///     }
/// }
///
/// impl BindableComponent for WelcomeMail {
///     fn descriptor() -> ComponentDescriptor {
///         ComponentDescriptor::of::<Self>().input::<String>("user")
///     }
///
///     fn set_parameters(&mut self, parameters: &BoundParameterSet) -> Result<(), ParameterError> {
///         parameters.assign("user", &mut self.user)?;
///         Ok(())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let orchestrator = RenderOrchestrator::from_settings(&RenderSettings::default());
/// let html = orchestrator
///     .render_model_to_string::<_, WelcomeMail>(
///         &Welcome { user: "Ada".into() },
///         &CancellationToken::new(),
///     )
///     .await
///     .unwrap();
/// assert_eq!(html, "<p>Welcome, Ada</p>");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RenderOrchestrator<R = ComponentRenderer> {
	binder: ParameterBinder,
	renderer: R,
}

impl<R: RenderComponent> RenderOrchestrator<R> {
	pub fn new(binder: ParameterBinder, renderer: R) -> Self {
		Self { binder, renderer }
	}

	pub fn binder(&self) -> &ParameterBinder {
		&self.binder
	}

	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	/// Binds `model` to `C`'s inputs and renders `C` once.
	pub async fn render_model_to_string<M, C>(
		&self,
		model: &M,
		cancel: &CancellationToken,
	) -> RenderOutcome
	where
		M: Serialize + 'static,
		C: BindableComponent,
	{
		let parameters = self
			.binder
			.bind(model, &C::descriptor())
			.map_err(|source| RenderError::Binding {
				component: C::name(),
				source,
			})?;
		self.renderer.render::<C>(parameters, cancel).await
	}
}

impl RenderOrchestrator<ComponentRenderer> {
	/// Wires the default engine, scope factory and logging manager.
	pub fn from_settings(settings: &RenderSettings) -> Self {
		let loggers: Arc<dyn LoggerFactory> = Arc::new(LoggingManager::new(
			LoggingConfig::with_level(settings.log_level),
		));
		Self::from_parts(
			settings,
			Arc::new(SsrEngine::new()),
			Arc::new(DefaultScopeFactory::new()),
			loggers,
		)
	}

	/// Wires caller-supplied process-wide collaborators.
	pub fn from_parts(
		settings: &RenderSettings,
		engine: Arc<dyn RenderEngine>,
		scopes: Arc<dyn ScopeFactory>,
		loggers: Arc<dyn LoggerFactory>,
	) -> Self {
		let binder = ParameterBinder::new(loggers.as_ref());
		let renderer = ComponentRenderer::from_settings(settings, engine, scopes, loggers);
		Self::new(binder, renderer)
	}
}
