//! feeds as Atom documents, with their OStatus endpoints published as links

use nenuphar_model::{Base, Category, Feed, Generator};

use crate::content;
use crate::entry;
use crate::error::{MapperError, Result};
use crate::link::{links_of, links_with_rel, Link};
use crate::object::{push_base, read_base};
use crate::person;
use crate::registry::{self, namespace_of, wire, Namespace, ACTIVITY_STREAMS, ATOM};
use crate::xml::Element;

pub const ELEMENT : &str = "feed";

pub fn from_canonical(feed: &Feed) -> Element {
	let mut element = Namespace::Atom.element(ELEMENT);
	let atom = |key: &'static str| Namespace::Atom.element(wire(ATOM, key));

	if let Some(uid) = not_empty(&feed.base.uid) {
		element.push(atom("uid").with_text(uid));
	}
	if let Some(title) = not_empty(&feed.title) {
		element.push(content::encode(wire(ATOM, "title"), title, feed.title_type));
	}
	if let Some(subtitle) = not_empty(&feed.subtitle) {
		element.push(content::encode(wire(ATOM, "subtitle"), subtitle, feed.subtitle_type));
	}
	if let Some(rights) = not_empty(&feed.rights) {
		element.push(atom("rights").with_text(rights));
	}
	if let Some(icon) = not_empty(&feed.icon) {
		element.push(atom("icon").with_text(icon));
	}
	if let Some(logo) = not_empty(&feed.logo) {
		element.push(atom("logo").with_text(logo));
	}
	if let Some(generator) = &feed.generator {
		if let Some(x) = generator_to_element(generator) {
			element.push(x);
		}
	}
	if let Some(display_name) = not_empty(&feed.display_name) {
		element.push(Namespace::ActivityStreams.element(wire(ACTIVITY_STREAMS, "display_name")).with_text(display_name));
	}
	if let Some(total_items) = feed.total_items {
		element.push(Namespace::ActivityStreams.element(wire(ACTIVITY_STREAMS, "total_items")).with_text(&total_items.to_string()));
	}

	// the url goes out as a self link, after the endpoints
	let base = Base { url: None, ..feed.base.clone() };
	push_base(&mut element, &base, "self");

	for contributor in &feed.contributors {
		element.push(person::encode(contributor, Namespace::Atom, "contributor"));
	}
	for category in &feed.categories {
		match category_to_element(category) {
			Some(x) => element.push(x),
			None => tracing::warn!("skipping category without term"),
		}
	}

	for hub in feed.hubs.iter().filter(|x| !x.is_empty()) {
		element.push(Link::new("hub", hub).to_element());
	}
	if let Some(salmon) = not_empty(&feed.salmon_url) {
		element.push(Link::new("salmon", salmon).to_element());
	}
	if let Some(url) = not_empty(&feed.base.url) {
		element.push(Link::new("self", url).to_element());
	}

	for item in &feed.items {
		element.push(entry::from_canonical(item));
	}

	element
}

pub fn to_canonical(element: &Element) -> Result<Feed> {
	if element.name != ELEMENT || namespace_of(element) != Some(Namespace::Atom) {
		return Err(MapperError::unexpected("feed", element));
	}

	let atom = Namespace::Atom.uri();
	let links = links_of(element);

	let title = element.child(atom, wire(ATOM, "title")).and_then(content::decode);
	let subtitle = element.child(atom, wire(ATOM, "subtitle")).and_then(content::decode);

	let salmon = links_with_rel(&links, "salmon");
	if salmon.len() > 1 {
		tracing::warn!("feed declares {} salmon endpoints, only the first one is used", salmon.len());
	}

	let total_items_tag = wire(ACTIVITY_STREAMS, "total_items");
	let total_items = element.child_text(Namespace::ActivityStreams.uri(), total_items_tag)
		.map(|x| registry::parse_number(total_items_tag, &x))
		.transpose()?;

	Ok(Feed {
		base: read_base(element)?,
		title_type: title.as_ref().map(|(_, t)| *t).unwrap_or_default(),
		title: title.map(|(x, _)| x),
		subtitle_type: subtitle.as_ref().map(|(_, t)| *t).unwrap_or_default(),
		subtitle: subtitle.map(|(x, _)| x),
		rights: element.child_text(atom, wire(ATOM, "rights")),
		icon: element.child_text(atom, wire(ATOM, "icon")),
		logo: element.child_text(atom, wire(ATOM, "logo")),
		categories: element.children_named(atom, "category")
			.filter_map(category_from_element)
			.collect(),
		contributors: element.children_named(atom, "contributor")
			.map(person::to_canonical)
			.collect::<Result<Vec<_>>>()?,
		items: element.children_named(atom, entry::ELEMENT)
			.map(entry::to_canonical)
			.collect::<Result<Vec<_>>>()?,
		hubs: links_with_rel(&links, "hub")
			.into_iter()
			.filter_map(|l| l.href.clone())
			.collect(),
		salmon_url: salmon.first().and_then(|l| l.href.clone()),
		display_name: element.child_text(Namespace::ActivityStreams.uri(), wire(ACTIVITY_STREAMS, "display_name")),
		total_items,
		generator: element.child(atom, "generator").and_then(generator_from_element),
	})
}

fn not_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|x| !x.is_empty())
}

pub fn category_to_element(category: &Category) -> Option<Element> {
	if category.term.is_empty() {
		return None;
	}
	let mut element = Namespace::Atom.element("category").with_attribute("term", &category.term);
	if let Some(label) = not_empty(&category.label) {
		element.set_attribute("label", label);
	}
	if let Some(scheme) = not_empty(&category.scheme) {
		element.set_attribute("scheme", scheme);
	}
	Some(element)
}

pub fn category_from_element(element: &Element) -> Option<Category> {
	let Some(term) = element.attribute("term").filter(|x| !x.is_empty()) else {
		tracing::warn!("ignoring category without term");
		return None;
	};
	Some(Category {
		term: term.to_string(),
		label: element.attribute("label").filter(|x| !x.is_empty()).map(str::to_string),
		scheme: element.attribute("scheme").filter(|x| !x.is_empty()).map(str::to_string),
	})
}

/// None when there is nothing to say about the generator
pub fn generator_to_element(generator: &Generator) -> Option<Element> {
	let mut element = Namespace::Atom.element("generator");
	if let Some(uri) = not_empty(&generator.uri) {
		element.set_attribute("uri", uri);
	}
	if let Some(version) = not_empty(&generator.version) {
		element.set_attribute("version", version);
	}
	if let Some(name) = not_empty(&generator.name) {
		element = element.with_text(name);
	}
	if element.attributes.is_empty() && element.children.is_empty() {
		None
	} else {
		Some(element)
	}
}

pub fn generator_from_element(element: &Element) -> Option<Generator> {
	let text = element.text();
	let generator = Generator {
		name: if text.trim().is_empty() { None } else { Some(text) },
		uri: element.attribute("uri").filter(|x| !x.is_empty()).map(str::to_string),
		version: element.attribute("version").filter(|x| !x.is_empty()).map(str::to_string),
	};
	if generator == Generator::default() {
		None
	} else {
		Some(generator)
	}
}
