//! Reinhardt Pages - static component rendering
//!
//! The component model and page tree used to render UI components into static
//! HTML: email bodies, static pages and other pre-rendered content. Rendering is
//! one-shot and non-interactive; pages carry no event handlers and no hydration
//! state.
//!
//! ## Architecture
//!
//! - [`component`]: the [`Page`] tree, the [`Component`] trait, and the binding
//!   contract ([`BindableComponent`], [`ComponentDescriptor`],
//!   [`BoundParameterSet`]) that lets a component's inputs be filled from an
//!   arbitrary model
//! - [`ssr`]: the [`RenderEngine`] seam, its default [`SsrEngine`], the per-call
//!   [`RenderContext`], and [`DocumentWriter`] for full-document output
//!
//! ## Example
//!
//! ```
//! use reinhardt_pages::{
//!     BindableComponent, BoundParameterSet, Component, ComponentDescriptor, ComponentError,
//!     IntoPage, Page, PageElement, ParameterError, RenderContext,
//! };
//!
//! #[derive(Default)]
//! struct Greeting {
//!     name: String,
//! }
//!
//! impl Component for Greeting {
//!     fn render(&self, _cx: &RenderContext) -> Result<Page, ComponentError> {
//!         Ok(PageElement::new("p")
//!             .child(format!("Hello, {}!", self.name))
//!             .into_page())
//!     }
//!
//!     fn name() -> &'static str {
//!         "Greeting"
//!     }
//! }
//!
//! impl BindableComponent for Greeting {
//!     fn descriptor() -> ComponentDescriptor {
//!         ComponentDescriptor::of::<Self>().input::<String>("name")
//!     }
//!
//!     fn set_parameters(&mut self, parameters: &BoundParameterSet) -> Result<(), ParameterError> {
//!         parameters.assign("name", &mut self.name)?;
//!         Ok(())
//!     }
//! }
//! ```

pub mod component;
pub mod error;
pub mod ssr;

pub use component::{
	AnyComponent, BindableComponent, BoundParameterSet, Component, ComponentDescriptor,
	InputField, InputType, IntoPage, Page, PageElement, ParamKind,
};
pub use error::{ComponentError, ParameterError};
pub use ssr::{DocumentOptions, DocumentWriter, RenderContext, RenderEngine, SsrEngine};
