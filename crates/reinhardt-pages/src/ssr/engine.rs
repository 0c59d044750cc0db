use super::context::RenderContext;
use crate::component::{AnyComponent, Page};
use crate::error::ComponentError;

/// The rendering primitive: one component, one pass, one page.
///
/// An engine is shared between calls but each call drives it from a single
/// worker, so implementations only need to be `Send + Sync` for sharing, not
/// for concurrent mutation of per-call state.
pub trait RenderEngine: Send + Sync {
	/// Runs the component's render once.
	fn render_once(
		&self,
		component: &dyn AnyComponent,
		cx: &RenderContext,
	) -> Result<Page, ComponentError>;

	/// Serializes a rendered page to markup.
	fn serialize(&self, page: &Page) -> String {
		page.render_to_string()
	}
}

/// The default engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SsrEngine;

impl SsrEngine {
	pub fn new() -> Self {
		Self
	}
}

impl RenderEngine for SsrEngine {
	fn render_once(
		&self,
		component: &dyn AnyComponent,
		cx: &RenderContext,
	) -> Result<Page, ComponentError> {
		cx.logger("reinhardt.pages.ssr")
			.record(reinhardt_logging::LogLevel::Debug, "rendering component")
			.field("component", component.component_name())
			.emit();
		component.render_dyn(cx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{Component, IntoPage, PageElement};
	use rstest::rstest;

	struct Greeting;

	impl Component for Greeting {
		fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
			Ok(PageElement::new("div").child("Hi").into_page())
		}

		fn name() -> &'static str {
			"Greeting"
		}
	}

	struct Broken;

	impl Component for Broken {
		fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
			Err(ComponentError::msg("boom"))
		}

		fn name() -> &'static str {
			"Broken"
		}
	}

	#[rstest]
	fn test_ssr_engine_renders_and_serializes() {
		let engine = SsrEngine::new();
		let cx = RenderContext::detached("Greeting");

		let page = engine.render_once(&Greeting, &cx).unwrap();

		assert_eq!(engine.serialize(&page), "<div>Hi</div>");
	}

	#[rstest]
	fn test_ssr_engine_passes_component_errors_through() {
		let engine = SsrEngine::new();
		let cx = RenderContext::detached("Broken");

		let err = engine.render_once(&Broken, &cx).unwrap_err();

		assert_eq!(err.to_string(), "boom");
	}
}
