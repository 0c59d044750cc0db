//! The page tree and its HTML serialization.

use super::markup::HtmlWriter;
use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// An HTML element.
	Element(PageElement),
	/// A text node. Escaped on output.
	Text(Cow<'static, str>),
	/// Trusted markup inserted verbatim.
	RawHtml(Cow<'static, str>),
	/// Several pages without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// An element in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	pub fn child_pages(&self) -> &[Page] {
		&self.children
	}

	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Inserts `markup` without escaping. Only use this for markup that is
	/// already trusted, such as a pre-rendered email body.
	pub fn raw_html(markup: impl Into<Cow<'static, str>>) -> Self {
		Self::RawHtml(markup.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut writer = HtmlWriter::new();
		self.write_to(&mut writer);
		writer.finish()
	}

	/// Serializes the tree into `writer`, walking it with an explicit stack.
	pub fn write_to(&self, writer: &mut HtmlWriter) {
		enum Step<'a> {
			Visit(&'a Page),
			Close(&'a str),
		}

		let mut stack = vec![Step::Visit(self)];
		while let Some(step) = stack.pop() {
			let page = match step {
				Step::Close(tag) => {
					writer.close(tag);
					continue;
				}
				Step::Visit(page) => page,
			};
			match page {
				Page::Element(el) => {
					let attrs = el.attrs.iter().map(|(k, v)| (&**k, &**v));
					if el.is_void {
						writer.void(&el.tag, attrs);
						continue;
					}
					writer.open(&el.tag, attrs);
					stack.push(Step::Close(&el.tag));
					stack.extend(el.children.iter().rev().map(Step::Visit));
				}
				Page::Text(text) => {
					writer.text(text);
				}
				Page::RawHtml(markup) => {
					writer.raw(markup);
				}
				Page::Fragment(children) => {
					stack.extend(children.iter().rev().map(Step::Visit));
				}
				Page::Empty => {}
			}
		}
	}
}

/// Trait for types that can be converted into a [`Page`].
pub trait IntoPage {
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}
