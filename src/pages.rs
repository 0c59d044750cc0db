//! Component model and page tree
//!
//! This module provides access to reinhardt-pages: the [`Page`] tree, the
//! component traits, and the default static render engine.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_prerender::pages::component::{IntoPage, PageElement};
//!
//! let page = PageElement::new("p").child("Your order has shipped.").into_page();
//! assert_eq!(page.render_to_string(), "<p>Your order has shipped.</p>");
//! ```

// Re-export all reinhardt-pages functionality
pub use reinhardt_pages::*;
