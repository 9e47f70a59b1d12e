//! typed text blocks: title, subtitle, summary and content all carry a `type` attribute telling
//! how to read them

use nenuphar_model::ContentType;

use crate::registry::Namespace;
use crate::xml::Element;

/// text is the default, so its type is left implicit. xhtml markup is written as is
pub fn encode(name: &str, text: &str, content_type: ContentType) -> Element {
	let element = Namespace::Atom.element(name);
	match content_type {
		ContentType::Text => element.with_text(text),
		ContentType::Html => element.with_attribute("type", "html").with_text(text),
		ContentType::Xhtml => element.with_attribute("type", "xhtml").with_raw(text),
	}
}

/// None when the block is empty
pub fn decode(element: &Element) -> Option<(String, ContentType)> {
	let text = element.text();
	if text.is_empty() {
		return None;
	}
	Some((text, content_type(element)))
}

pub fn content_type(element: &Element) -> ContentType {
	let Some(declared) = element.attribute("type") else { return ContentType::Text };
	match ContentType::try_from(declared) {
		Ok(x) => x,
		// some publishers put a mime type in there
		Err(_) if declared.contains("html") => ContentType::Html,
		Err(e) => {
			tracing::warn!("reading <{}> as text: {e}", element.name);
			ContentType::Text
		},
	}
}

#[cfg(test)]
mod test {
	use nenuphar_model::ContentType;

	use super::{decode, encode};
	use crate::xml::Node;

	#[test]
	fn text_type_is_implicit() {
		let element = encode("title", "hello", ContentType::Text);
		assert_eq!(element.attribute("type"), None);
		assert_eq!(decode(&element), Some(("hello".to_string(), ContentType::Text)));
	}

	#[test]
	fn html_is_escaped_text() {
		let element = encode("content", "<b>hi</b>", ContentType::Html);
		assert_eq!(element.attribute("type"), Some("html"));
		assert_eq!(element.children, vec![Node::Text("<b>hi</b>".to_string())]);
	}

	#[test]
	fn xhtml_is_raw_markup() {
		let element = encode("content", "<div>hi</div>", ContentType::Xhtml);
		assert_eq!(element.children, vec![Node::Raw("<div>hi</div>".to_string())]);
		assert_eq!(decode(&element), Some(("<div>hi</div>".to_string(), ContentType::Xhtml)));
	}

	#[test]
	fn odd_types_are_tolerated() {
		let element = encode("content", "x", ContentType::Text).with_attribute("type", "text/html");
		assert_eq!(decode(&element).map(|(_, t)| t), Some(ContentType::Html));
		let element = encode("content", "x", ContentType::Text).with_attribute("type", "image/png");
		assert_eq!(decode(&element).map(|(_, t)| t), Some(ContentType::Text));
	}

	#[test]
	fn empty_blocks_are_absent() {
		assert_eq!(decode(&encode("title", "", ContentType::Html)), None);
	}
}
