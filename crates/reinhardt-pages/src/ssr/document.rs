use crate::component::HtmlWriter;

/// Options for full-document output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
	/// Language attribute for the `html` element.
	pub lang: String,
	/// Document title, escaped on output.
	pub title: Option<String>,
	/// Whether to collapse whitespace outside `<pre>` blocks.
	pub minify: bool,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: None,
			minify: false,
		}
	}
}

impl DocumentOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Enables minification.
	pub fn minify(mut self) -> Self {
		self.minify = true;
		self
	}
}

/// Wraps rendered fragments in a complete HTML document.
#[derive(Debug, Clone, Default)]
pub struct DocumentWriter {
	options: DocumentOptions,
}

impl DocumentWriter {
	pub fn new(options: DocumentOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &DocumentOptions {
		&self.options
	}

	/// Wraps `content` in a full HTML document.
	pub fn wrap(&self, content: &str) -> String {
		let options = &self.options;
		let mut w = HtmlWriter::with_capacity(content.len() + 256);

		w.raw("<!DOCTYPE html>").newline();
		w.open("html", [("lang", options.lang.as_str())]).newline();

		w.open_bare("head").newline();
		w.void("meta", [("charset", "UTF-8")]).newline();
		w.void(
			"meta",
			[
				("name", "viewport"),
				("content", "width=device-width, initial-scale=1.0"),
			],
		)
		.newline();
		if let Some(title) = &options.title {
			w.open_bare("title").text(title).close("title").newline();
		}
		w.close("head").newline();

		w.open_bare("body").newline();
		w.raw(content).newline();
		w.close("body").newline();
		w.close("html");

		let html = w.finish();
		if options.minify {
			minify_html(&html)
		} else {
			html
		}
	}
}

/// Inputs larger than this (1 MiB) are returned unmodified.
const MINIFY_HTML_MAX_INPUT_SIZE: usize = 1024 * 1024;

const PRE_CLOSE: &str = "</pre>";

/// Collapses runs of whitespace to a single space, copying `<pre>` blocks
/// verbatim. An unterminated `<pre>` runs to the end of the input.
fn minify_html(html: &str) -> String {
	if html.len() > MINIFY_HTML_MAX_INPUT_SIZE {
		return html.to_string();
	}

	let mut out = String::with_capacity(html.len());
	let mut rest = html;
	while let Some(start) = find_pre_open(rest) {
		collapse_whitespace(&rest[..start], &mut out);
		let block = &rest[start..];
		let end = block
			.find(PRE_CLOSE)
			.map_or(block.len(), |i| i + PRE_CLOSE.len());
		out.push_str(&block[..end]);
		rest = &block[end..];
	}
	collapse_whitespace(rest, &mut out);
	out
}

/// Byte offset of the next `<pre>` or `<pre ...>` tag.
fn find_pre_open(html: &str) -> Option<usize> {
	html.match_indices("<pre").map(|(i, _)| i).find(|&i| {
		html[i + "<pre".len()..]
			.chars()
			.next()
			.is_none_or(|c| c == '>' || c.is_ascii_whitespace())
	})
}

fn collapse_whitespace(segment: &str, out: &mut String) {
	let mut in_space = false;
	for c in segment.chars() {
		if c.is_whitespace() {
			if !in_space {
				out.push(' ');
			}
			in_space = true;
		} else {
			out.push(c);
			in_space = false;
		}
	}
}
