//! Component System for reinhardt-pages
//!
//! ## Features
//!
//! - **Page tree**: elements, text, trusted raw markup, fragments
//! - **IntoPage trait**: convert any type into a renderable [`Page`]
//! - **Component trait**: reusable units of template logic
//! - **Binding contract**: a component declares its inputs through a
//!   [`ComponentDescriptor`] and accepts them as a [`BoundParameterSet`]
//!
//! ## Usage
//!
//! ```
//! use reinhardt_pages::component::{IntoPage, PageElement};
//!
//! let page = PageElement::new("div")
//!     .attr("class", "greeting")
//!     .child(PageElement::new("p").child("Hello, World!"))
//!     .into_page();
//!
//! assert_eq!(
//!     page.render_to_string(),
//!     "<div class=\"greeting\"><p>Hello, World!</p></div>"
//! );
//! ```

mod descriptor;
mod markup;
mod page;
mod parameters;
mod r#trait;

pub use descriptor::{ComponentDescriptor, InputField, InputType, ParamKind};
pub use markup::{HtmlWriter, html_escape};
pub use page::{IntoPage, Page, PageElement};
pub use parameters::BoundParameterSet;
pub use r#trait::{AnyComponent, BindableComponent, Component};
