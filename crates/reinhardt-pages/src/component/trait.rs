//! Component trait definitions.

use super::descriptor::ComponentDescriptor;
use super::page::Page;
use super::parameters::BoundParameterSet;
use crate::error::{ComponentError, ParameterError};
use crate::ssr::RenderContext;

/// Trait for reusable UI components.
///
/// Components encapsulate state and rendering logic into reusable units.
/// Rendering is one-shot: `render` is called once per render call and its
/// result is serialized as-is.
///
/// # Example
///
/// ```
/// use reinhardt_pages::{Component, ComponentError, IntoPage, Page, RenderContext};
///
/// struct Banner;
///
/// impl Component for Banner {
///     fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
///         Ok(Page::element("header").child("Welcome").into_page())
///     }
///
///     fn name() -> &'static str {
///         "Banner"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self, cx: &RenderContext) -> Result<Page, ComponentError>;

	/// Returns the component's name, used in logs and errors.
	fn name() -> &'static str
	where
		Self: Sized;
}

/// Object-safe view of a [`Component`], used by render engines.
pub trait AnyComponent {
	fn component_name(&self) -> &'static str;

	fn render_dyn(&self, cx: &RenderContext) -> Result<Page, ComponentError>;
}

impl<C: Component> AnyComponent for C {
	fn component_name(&self) -> &'static str {
		C::name()
	}

	fn render_dyn(&self, cx: &RenderContext) -> Result<Page, ComponentError> {
		self.render(cx)
	}
}

impl std::fmt::Debug for dyn AnyComponent + '_ {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnyComponent")
			.field("name", &self.component_name())
			.finish()
	}
}

/// A component whose inputs can be filled from bound parameters.
///
/// The descriptor lists the inputs a caller may set; `set_parameters` copies
/// bound values onto a default-constructed instance. Inputs missing from the
/// set keep their defaults.
pub trait BindableComponent: Component + Default {
	/// Declares this component's inputs.
	fn descriptor() -> ComponentDescriptor;

	/// Applies bound values to this instance.
	fn set_parameters(&mut self, parameters: &BoundParameterSet) -> Result<(), ParameterError>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{IntoPage, PageElement};
	use rstest::rstest;

	#[derive(Default)]
	struct Notice {
		text: String,
	}

	impl Component for Notice {
		fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
			if self.text.is_empty() {
				return Err(ComponentError::msg("notice text is required"));
			}
			Ok(PageElement::new("aside").child(self.text.clone()).into_page())
		}

		fn name() -> &'static str {
			"Notice"
		}
	}

	impl BindableComponent for Notice {
		fn descriptor() -> ComponentDescriptor {
			ComponentDescriptor::of::<Self>().input::<String>("text")
		}

		fn set_parameters(&mut self, parameters: &BoundParameterSet) -> Result<(), ParameterError> {
			parameters.assign("text", &mut self.text)?;
			Ok(())
		}
	}

	#[rstest]
	fn test_any_component_delegates() {
		let cx = RenderContext::detached("Notice");
		let notice = Notice {
			text: "Maintenance tonight".into(),
		};
		let dynamic: &dyn AnyComponent = &notice;

		assert_eq!(dynamic.component_name(), "Notice");
		assert_eq!(
			dynamic.render_dyn(&cx).unwrap().render_to_string(),
			"<aside>Maintenance tonight</aside>"
		);
		assert!(format!("{dynamic:?}").contains("Notice"));
	}

	#[rstest]
	fn test_descriptor_named_after_component() {
		let descriptor = Notice::descriptor();
		assert_eq!(descriptor.component_name(), "Notice");
		assert_eq!(descriptor.inputs().len(), 1);
	}

	#[rstest]
	fn test_component_error_surfaces() {
		let cx = RenderContext::detached("Notice");
		let err = Notice::default().render(&cx).unwrap_err();
		assert_eq!(err.to_string(), "notice text is required");
	}
}
