//! owned element tree on top of quick-xml: just enough structure for the mappers to walk and
//! build documents. elements are keyed by resolved namespace uri, prefixes only exist on the
//! wire and are assigned again when writing

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::{NsReader, Writer};

use crate::config::WriterConfig;
use crate::error::{MapperError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
	/// resolved namespace uri, None when the element is not in any namespace
	pub namespace: Option<String>,
	pub name: String,
	pub attributes: Vec<(String, String)>,
	pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Element(Element),
	Text(String),
	/// markup kept verbatim: not escaped when written, not parsed when read
	Raw(String),
}

impl Element {
	pub fn new(namespace: &str, name: &str) -> Self {
		Element {
			namespace: Some(namespace.to_string()),
			name: name.to_string(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
		self.set_attribute(key, value);
		self
	}

	pub fn with_text(mut self, text: &str) -> Self {
		self.children.push(Node::Text(text.to_string()));
		self
	}

	pub fn with_raw(mut self, markup: &str) -> Self {
		self.children.push(Node::Raw(markup.to_string()));
		self
	}

	pub fn with_child(mut self, child: Element) -> Self {
		self.push(child);
		self
	}

	pub fn push(&mut self, child: Element) {
		self.children.push(Node::Element(child));
	}

	pub fn set_attribute(&mut self, key: &str, value: &str) {
		match self.attributes.iter_mut().find(|(k, _)| k == key) {
			Some((_, v)) => *v = value.to_string(),
			None => self.attributes.push((key.to_string(), value.to_string())),
		}
	}

	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn is(&self, namespace: &str, name: &str) -> bool {
		self.name == name && self.namespace.as_deref() == Some(namespace)
	}

	/// child elements, skipping text
	pub fn elements(&self) -> impl Iterator<Item = &Element> {
		self.children.iter().filter_map(|node| match node {
			Node::Element(x) => Some(x),
			_ => None,
		})
	}

	pub fn children_named<'a>(&'a self, namespace: &'a str, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
		self.elements().filter(move |x| x.is(namespace, name))
	}

	pub fn child(&self, namespace: &str, name: &str) -> Option<&Element> {
		self.elements().find(|x| x.is(namespace, name))
	}

	/// concatenated text content of this element, markup included for raw nodes
	pub fn text(&self) -> String {
		let mut out = String::new();
		for node in &self.children {
			match node {
				Node::Text(x) | Node::Raw(x) => out.push_str(x),
				Node::Element(x) => out.push_str(&x.text()),
			}
		}
		out
	}

	/// text of first matching child, None if missing or blank
	pub fn child_text(&self, namespace: &str, name: &str) -> Option<String> {
		let text = self.child(namespace, name)?.text();
		if text.is_empty() {
			None
		} else {
			Some(text)
		}
	}
}

/// elements declaring `type="xhtml"` hold markup which is kept as a raw string instead of being
/// parsed into the tree
pub fn parse(input: &str) -> Result<Element> {
	let mut reader = NsReader::from_str(input);
	let mut stack : Vec<Element> = Vec::new();

	loop {
		let (namespace, event) = {
			let (ns, event) = reader.read_resolved_event()?;
			(namespace_uri(ns), event)
		};

		match event {
			Event::Start(start) => {
				let mut element = open(namespace, &start)?;
				if element.attribute("type") == Some("xhtml") {
					let markup = reader.read_text(start.name())?;
					element.children.push(Node::Raw(markup.into_owned()));
					if let Some(root) = close(&mut stack, element) {
						return Ok(root);
					}
				} else {
					stack.push(element);
				}
			},
			Event::Empty(start) => {
				let element = open(namespace, &start)?;
				if let Some(root) = close(&mut stack, element) {
					return Ok(root);
				}
			},
			Event::End(_) => {
				// quick-xml already checks that end names match their start
				if let Some(element) = stack.pop() {
					if let Some(root) = close(&mut stack, element) {
						return Ok(root);
					}
				}
			},
			Event::Text(text) => {
				if let Some(parent) = stack.last_mut() {
					let text = text.unescape()?;
					// whitespace between elements is formatting, not content
					if !text.trim().is_empty() {
						parent.children.push(Node::Text(text.into_owned()));
					}
				}
			},
			Event::CData(data) => {
				if let Some(parent) = stack.last_mut() {
					let text = std::str::from_utf8(&data)?;
					parent.children.push(Node::Text(text.to_string()));
				}
			},
			Event::Eof => {
				return match stack.pop() {
					Some(unclosed) => Err(MapperError::Truncated(unclosed.name)),
					None => Err(MapperError::EmptyDocument),
				};
			},
			// declaration, comments, processing instructions and doctype carry nothing for us
			_ => {},
		}
	}
}

fn namespace_uri(resolved: ResolveResult) -> Option<String> {
	match resolved {
		ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
		ResolveResult::Unbound | ResolveResult::Unknown(_) => None,
	}
}

fn open(namespace: Option<String>, start: &BytesStart) -> Result<Element> {
	let mut element = Element {
		namespace,
		name: std::str::from_utf8(start.local_name().as_ref())?.to_string(),
		attributes: Vec::new(),
		children: Vec::new(),
	};

	for attribute in start.attributes() {
		let attribute = attribute?;
		if attribute.key.as_namespace_binding().is_some() {
			continue; // xmlns declarations were already resolved by the reader
		}
		let key = std::str::from_utf8(attribute.key.as_ref())?;
		if key.contains(':') && !key.starts_with("xml:") {
			tracing::debug!("dropping foreign attribute '{key}' on <{}>", element.name);
			continue;
		}
		let value = attribute.unescape_value()?;
		element.attributes.push((key.to_string(), value.into_owned()));
	}

	Ok(element)
}

fn close(stack: &mut [Element], element: Element) -> Option<Element> {
	match stack.last_mut() {
		Some(parent) => {
			parent.children.push(Node::Element(element));
			None
		},
		None => Some(element),
	}
}

/// serializes a document rooted at `root`. every `(prefix, uri)` pair is declared on the root
/// element, an empty prefix being the default namespace
pub fn write(root: &Element, prefixes: &[(&str, &str)], config: &WriterConfig) -> Result<String> {
	let mut writer = if config.pretty {
		Writer::new_with_indent(Vec::new(), b' ', config.indent_size)
	} else {
		Writer::new(Vec::new())
	};

	writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

	let mut scope = Scope { prefixes, generated: 0 };
	write_element(&mut writer, root, &mut scope, true)?;

	Ok(String::from_utf8(writer.into_inner())?)
}

struct Scope<'a> {
	prefixes: &'a [(&'a str, &'a str)],
	generated: usize,
}

impl Scope<'_> {
	fn prefix_of(&self, namespace: &str) -> Option<&str> {
		self.prefixes
			.iter()
			.find(|(_, uri)| *uri == namespace)
			.map(|(prefix, _)| *prefix)
	}

	fn has_default(&self) -> bool {
		self.prefixes.iter().any(|(prefix, _)| prefix.is_empty())
	}
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element, scope: &mut Scope, root: bool) -> Result<()> {
	let mut declarations : Vec<(String, String)> = Vec::new();

	if root {
		for (prefix, uri) in scope.prefixes {
			let key = if prefix.is_empty() { "xmlns".to_string() } else { format!("xmlns:{prefix}") };
			declarations.push((key, uri.to_string()));
		}
	}

	let qualified = match element.namespace.as_deref() {
		None => {
			if scope.has_default() {
				declarations.push(("xmlns".to_string(), String::new()));
			}
			element.name.clone()
		},
		Some(ns) => match scope.prefix_of(ns) {
			Some("") => element.name.clone(),
			Some(prefix) => format!("{prefix}:{}", element.name),
			None => {
				// namespace we have no prefix for: bind a throwaway one right here
				let prefix = format!("ns{}", scope.generated);
				scope.generated += 1;
				declarations.push((format!("xmlns:{prefix}"), ns.to_string()));
				format!("{prefix}:{}", element.name)
			},
		},
	};

	let mut start = BytesStart::new(qualified.as_str());
	for (key, value) in declarations.iter().chain(element.attributes.iter()) {
		start.push_attribute((key.as_str(), value.as_str()));
	}

	if element.children.is_empty() {
		writer.write_event(Event::Empty(start))?;
		return Ok(());
	}

	writer.write_event(Event::Start(start))?;
	for node in &element.children {
		match node {
			Node::Element(child) => write_element(writer, child, scope, false)?,
			Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
			Node::Raw(markup) => writer.write_event(Event::Text(BytesText::from_escaped(markup.as_str())))?,
		}
	}
	writer.write_event(Event::End(BytesEnd::new(qualified.as_str())))?;

	Ok(())
}

#[cfg(test)]
mod test {
	use super::{parse, write, Element, Node};
	use crate::config::WriterConfig;

	const ATOM: &str = "http://www.w3.org/2005/Atom";
	const POCO: &str = "http://portablecontacts.net/spec/1.0";

	#[test]
	fn parse_resolves_namespaces_regardless_of_prefix() {
		let doc = r#"<?xml version="1.0"?>
			<a:feed xmlns:a="http://www.w3.org/2005/Atom" xmlns:p="http://portablecontacts.net/spec/1.0">
				<a:author><p:displayName>wilkie</p:displayName></a:author>
			</a:feed>"#;
		let root = parse(doc).expect("valid document");
		assert!(root.is(ATOM, "feed"));
		let author = root.child(ATOM, "author").expect("author is present");
		assert_eq!(author.child_text(POCO, "displayName").as_deref(), Some("wilkie"));
	}

	#[test]
	fn parse_unescapes_text_and_attributes() {
		let root = parse(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title type="html">&lt;b&gt;hi&lt;/b&gt; &amp; bye</title><link href="http://a/?x=1&amp;y=2"/></feed>"#)
			.expect("valid document");
		assert_eq!(root.child_text(ATOM, "title").as_deref(), Some("<b>hi</b> & bye"));
		assert_eq!(root.child(ATOM, "link").and_then(|x| x.attribute("href")), Some("http://a/?x=1&y=2"));
	}

	#[test]
	fn xhtml_content_is_kept_raw() {
		let root = parse(r#"<entry xmlns="http://www.w3.org/2005/Atom"><content type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml"><p>hi</p></div></content></entry>"#)
			.expect("valid document");
		let content = root.child(ATOM, "content").expect("content is present");
		assert_eq!(
			content.children,
			vec![Node::Raw(r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>hi</p></div>"#.to_string())],
		);
	}

	#[test]
	fn empty_input_is_an_error() {
		assert!(parse("").is_err());
		assert!(parse("<?xml version=\"1.0\"?>").is_err());
	}

	#[test]
	fn unclosed_document_is_an_error() {
		assert!(parse(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>hi</title>"#).is_err());
	}

	#[test]
	fn write_declares_prefixes_on_root() {
		let root = Element::new(ATOM, "author")
			.with_child(Element::new(ATOM, "name").with_text("wilkie"))
			.with_child(Element::new(POCO, "nickname").with_text("w & co"));
		let out = write(&root, &[("", ATOM), ("poco", POCO)], &WriterConfig { pretty: false, indent_size: 0 })
			.expect("serializable");
		assert_eq!(
			out,
			r#"<?xml version="1.0" encoding="UTF-8"?><author xmlns="http://www.w3.org/2005/Atom" xmlns:poco="http://portablecontacts.net/spec/1.0"><name>wilkie</name><poco:nickname>w &amp; co</poco:nickname></author>"#,
		);
	}

	#[test]
	fn written_documents_parse_back() {
		let root = Element::new(ATOM, "entry")
			.with_child(Element::new(ATOM, "title").with_attribute("type", "html").with_text("<i>x</i>"))
			.with_child(Element::new("urn:example:unknown", "thing").with_text("kept"));
		let out = write(&root, &[("", ATOM)], &WriterConfig::default()).expect("serializable");
		assert_eq!(parse(&out).expect("parsable"), root);
	}
}
