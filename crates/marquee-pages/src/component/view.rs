//! IntoView trait and View enum for page rendering.

use std::borrow::Cow;

/// A unified representation of renderable content.
///
/// Pages build a `View` tree and the outlet turns it into markup in one step,
/// so a swap never exposes a half-built page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	is_void: bool,
}

impl ElementView {
	/// Creates a new element view.
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

	/// Adds a boolean attribute when `enabled` is true.
	pub fn flag(self, name: &'static str, enabled: bool) -> Self {
		if enabled { self.attr(name, name) } else { self }
	}

	/// Sets the `class` attribute.
	pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
		self.attr("class", class)
	}

	/// Marks the element as a source of structured UI events.
	///
	/// The outlet reports clicks, submits and changes on elements carrying
	/// `data-action` to the mounted page as a [`UiEvent`](super::UiEvent).
	pub fn action(self, action: impl Into<Cow<'static, str>>) -> Self {
		self.attr("data-action", action)
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of an attribute, if set.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::fragment(self)
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

/// Escapes text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
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

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_void_element_detection() {
		assert!(ElementView::new("img").is_void());
		assert!(ElementView::new("input").is_void());
		assert!(!ElementView::new("div").is_void());
	}

	#[rstest]
	fn test_render_element_with_attrs_and_children() {
		let view = View::element("ul")
			.class("movies")
			.child(View::element("li").child("Alien"))
			.into_view();

		assert_eq!(
			view.render_to_string(),
			r#"<ul class="movies"><li>Alien</li></ul>"#
		);
	}

	#[rstest]
	fn test_render_void_element() {
		let view = View::element("img").attr("src", "/a.jpg").into_view();
		assert_eq!(view.render_to_string(), r#"<img src="/a.jpg" />"#);
	}

	#[rstest]
	#[case(true, r#"<button disabled="disabled">x</button>"#)]
	#[case(false, "<button>x</button>")]
	fn test_flag_attribute(#[case] enabled: bool, #[case] expected: &str) {
		let view = View::element("button")
			.flag("disabled", enabled)
			.child("x")
			.into_view();
		assert_eq!(view.render_to_string(), expected);
	}

	#[rstest]
	fn test_render_text_is_escaped() {
		let view = View::text("<script>alert('x')</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_attribute_values_are_escaped() {
		let view = View::element("a")
			.attr("href", "/movies?q=a&order=\"x\"")
			.into_view();
		assert_eq!(
			view.render_to_string(),
			r#"<a href="/movies?q=a&amp;order=&quot;x&quot;"></a>"#
		);
	}

	#[rstest]
	fn test_fragment_and_empty() {
		let view = View::fragment(vec![View::text("a"), View::empty(), View::text("b")]);
		assert_eq!(view.render_to_string(), "ab");
		assert_eq!(None::<View>.into_view(), View::Empty);
	}

	#[rstest]
	fn test_get_attr() {
		let el = View::element("select").action("order");
		assert_eq!(el.get_attr("data-action"), Some("order"));
		assert_eq!(el.get_attr("id"), None);
	}
}
