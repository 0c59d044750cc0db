//! Static server-side rendering.
//!
//! A [`RenderEngine`] runs one component once under a [`RenderContext`] and
//! serializes the resulting [`Page`](crate::component::Page) to markup.
//! [`SsrEngine`] is the default engine. [`DocumentWriter`] wraps a rendered
//! fragment in a complete HTML document when callers need one.

mod context;
mod document;
mod engine;

pub use context::RenderContext;
pub use document::{DocumentOptions, DocumentWriter};
pub use engine::{RenderEngine, SsrEngine};
