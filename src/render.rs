//! Binding and rendering pipeline.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reinhardt_prerender::render::{RenderOrchestrator, RenderSettings};
//!
//! let settings = RenderSettings::from_file("render.toml").unwrap();
//! let orchestrator = RenderOrchestrator::from_settings(&settings);
//! ```

pub use reinhardt_render::*;
