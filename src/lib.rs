//! # Reinhardt Prerender
//!
//! Render Reinhardt components into static HTML strings, outside any
//! interactive request pipeline, so the output can be embedded in emails,
//! static pages or other pre-rendered content.
//!
//! Given an arbitrary serializable model and a component type, a render call
//! binds the model's fields to the component's declared inputs, renders the
//! component once inside an isolated scope, and returns the markup or a
//! [`RenderError`] describing what went wrong.
//!
//! ## Crates
//!
//! - [`pages`]: page tree, components, the default render engine
//! - [`render`]: parameter binding, rendering, orchestration, settings
//! - [`di`]: per-call scopes over shared singleton services
//! - [`logging`]: the logger factory shared by every call
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_prerender::prelude::*;
//!
//! #[derive(Serialize)]
//! struct Mail {
//!     subject: String,
//! }
//!
//! #[derive(Default)]
//! struct Subject {
//!     subject: String,
//! }
//!
//! impl Component for Subject {
//!     fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
//!         Ok(PageElement::new("div").child(self.subject.clone()).into_page())
//!     }
//!
//!     fn name() -> &'static str {
//!         "Subject"
//!     }
//! }
//!
//! impl BindableComponent for Subject {
//!     fn descriptor() -> ComponentDescriptor {
//!         ComponentDescriptor::of::<Self>().input::<String>("subject")
//!     }
//!
//!     fn set_parameters(&mut self, parameters: &BoundParameterSet) -> Result<(), ParameterError> {
//!         parameters.assign("subject", &mut self.subject)?;
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let orchestrator = RenderOrchestrator::from_settings(&RenderSettings::default());
//! let html = orchestrator
//!     .render_model_to_string::<_, Subject>(&Mail { subject: "Hi".into() }, &CancellationToken::new())
//!     .await
//!     .unwrap();
//! assert_eq!(html, "<div>Hi</div>");
//! # }
//! ```

pub mod pages;
pub mod render;

pub use reinhardt_di as di;
pub use reinhardt_logging as logging;

pub use reinhardt_render::{RenderError, RenderOrchestrator, RenderOutcome, RenderSettings};

pub mod prelude {
	pub use reinhardt_pages::{
		BindableComponent, BoundParameterSet, Component, ComponentDescriptor, ComponentError,
		IntoPage, Page, PageElement, ParameterError, RenderContext,
	};
	pub use reinhardt_render::{
		CancelReason, OutputMode, RenderError, RenderOrchestrator, RenderOutcome, RenderSettings,
	};
	pub use tokio_util::sync::CancellationToken;

	// External
	pub use serde::Serialize;
}
