//! # Reinhardt Render
//!
//! Renders components into static HTML outside any request pipeline, for
//! email bodies, static pages and other pre-rendered content.
//!
//! A call runs as a straight pipeline:
//!
//! 1. [`ParameterBinder`] matches the fields of an arbitrary serializable model
//!    against the inputs a component declares, coercing primitives where it
//!    can. Fields it cannot use are skipped with a warning.
//! 2. [`ComponentRenderer`] creates an isolated scope, builds the component on
//!    a dedicated worker, renders it exactly once and serializes the result.
//! 3. [`RenderOrchestrator`] sequences the two and returns a [`RenderOutcome`].
//!
//! Every failure is returned as a [`RenderError`] value and logged once where
//! it was detected. Nothing is retried.

pub mod binder;
pub mod coercion;
pub mod error;
pub mod orchestrator;
pub mod renderer;
pub mod settings;

pub use binder::ParameterBinder;
pub use error::{BindingError, CancelReason, RenderCause, RenderError, RenderOutcome};
pub use orchestrator::RenderOrchestrator;
pub use renderer::{ComponentRenderer, RenderComponent};
pub use settings::{OutputMode, RenderSettings, SettingsError};
