//! Low-level HTML output shared by page serialization and document wrapping.

use std::borrow::Cow;

/// Append-only HTML buffer.
///
/// Text and attribute values passed through [`text`](Self::text) and the tag
/// methods are escaped; [`raw`](Self::raw) inserts trusted markup as is.
#[derive(Debug, Default)]
pub struct HtmlWriter {
	buf: String,
}

impl HtmlWriter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: String::with_capacity(capacity),
		}
	}

	/// Writes `<tag a="v" ...>`.
	pub fn open<'a, I>(&mut self, tag: &str, attrs: I) -> &mut Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		self.start_tag(tag, attrs);
		self.buf.push('>');
		self
	}

	/// Writes `<tag>`.
	pub fn open_bare(&mut self, tag: &str) -> &mut Self {
		self.open(tag, std::iter::empty::<(&str, &str)>())
	}

	/// Writes a self-closing `<tag a="v" ... />`.
	pub fn void<'a, I>(&mut self, tag: &str, attrs: I) -> &mut Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		self.start_tag(tag, attrs);
		self.buf.push_str(" />");
		self
	}

	/// Writes `</tag>`.
	pub fn close(&mut self, tag: &str) -> &mut Self {
		self.buf.push_str("</");
		self.buf.push_str(tag);
		self.buf.push('>');
		self
	}

	pub fn text(&mut self, text: &str) -> &mut Self {
		self.buf.push_str(&html_escape(text));
		self
	}

	pub fn raw(&mut self, markup: &str) -> &mut Self {
		self.buf.push_str(markup);
		self
	}

	pub fn newline(&mut self) -> &mut Self {
		self.buf.push('\n');
		self
	}

	pub fn len(&self) -> usize {
		self.buf.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	pub fn finish(self) -> String {
		self.buf
	}

	fn start_tag<'a, I>(&mut self, tag: &str, attrs: I)
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		self.buf.push('<');
		self.buf.push_str(tag);
		for (name, value) in attrs {
			self.buf.push(' ');
			self.buf.push_str(name);
			self.buf.push_str("=\"");
			self.buf.push_str(&html_escape(value));
			self.buf.push('"');
		}
	}
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	let Some(first) = s.find(['&', '<', '>', '"', '\'']) else {
		return Cow::Borrowed(s);
	};
	let mut escaped = String::with_capacity(s.len() + 8);
	escaped.push_str(&s[..first]);
	for c in s[first..].chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
