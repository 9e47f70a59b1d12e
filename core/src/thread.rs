//! `thr:in-reply-to`, the Atom Threading extension

use nenuphar_model::{Activity, ThreadReference};

use crate::error::{MapperError, Result};
use crate::registry::{wire, Namespace, THREADING};
use crate::xml::Element;

pub const ELEMENT : &str = "in-reply-to";

pub fn from_canonical(reference: &ThreadReference) -> Element {
	let mut element = Namespace::Threading.element(ELEMENT);
	let attributes = [
		("href", &reference.href),
		("reference", &reference.reference),
		("media_type", &reference.media_type),
		("source", &reference.source),
	];
	for (key, value) in attributes {
		if let Some(value) = value.as_deref().filter(|x| !x.is_empty()) {
			element.set_attribute(wire(THREADING, key), value);
		}
	}
	element
}

/// all the reference attributes, for lossless round trips
pub fn parse(element: &Element) -> Result<ThreadReference> {
	if !element.is(Namespace::Threading.uri(), ELEMENT) {
		return Err(MapperError::unexpected("thr:in-reply-to", element));
	}
	let attribute = |key: &'static str| element.attribute(wire(THREADING, key))
		.filter(|x| !x.is_empty())
		.map(str::to_string);
	Ok(ThreadReference {
		reference: attribute("reference"),
		href: attribute("href"),
		media_type: attribute("media_type"),
		source: attribute("source"),
	})
}

/// the activity being replied to, as far as the reference knows it: url and uid only
pub fn to_canonical(element: &Element) -> Result<Activity> {
	Ok(parse(element)?.to_activity())
}
