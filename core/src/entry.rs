//! activities as Atom entries, decorated with ActivityStreams verbs and object types

use nenuphar_model::{Activity, ActivityObject, ObjectType, Source, Verb};

use crate::content;
use crate::error::{MapperError, Result};
use crate::link::Link;
use crate::object::{self, body, has_body, is_embedded, object_type_element, push_base, push_body, read_base, read_object_type};
use crate::person;
use crate::registry::{self, namespace_of, schema_uri, strip_schema, wire, Namespace, ACTIVITY_STREAMS, ATOM};
use crate::thread;
use crate::xml::Element;

pub const ELEMENT : &str = "entry";

pub fn from_canonical(activity: &Activity) -> Element {
	let mut entry = Namespace::Atom.element(ELEMENT);

	if let Some(uid) = activity.base.uid.as_deref().filter(|x| !x.is_empty()) {
		entry.push(Namespace::Atom.element(wire(ATOM, "uid")).with_text(uid));
	}

	let object = activity.object.as_deref();
	let object_type = object.map(|x| x.object_type()).unwrap_or(ObjectType::Activity);
	entry.push(object_type_element(&object_type));

	if let Some(verb) = &activity.verb {
		entry.push(
			Namespace::ActivityStreams.element(wire(ACTIVITY_STREAMS, "verb"))
				.with_text(&schema_uri(verb.as_ref()))
		);
	}

	// the body is always there for plain atom readers, even when the object is embedded
	if let Some(object) = object {
		push_body(&mut entry, object);
	}

	// actors are who the activity belongs to, atom readers know them as authors
	let mut base = activity.base.clone();
	base.authors = activity.people().to_vec();
	push_base(&mut entry, &base, "self");

	if let Some(object) = object.filter(|x| is_embedded(x)) {
		entry.push(object::encode(object, wire(ACTIVITY_STREAMS, "object")));
	}

	for target in &activity.targets {
		entry.push(object::encode(target, wire(ACTIVITY_STREAMS, "target")));
	}

	for reference in &activity.in_reply_to {
		entry.push(thread::from_canonical(reference));
	}

	if let Some(source) = &activity.base.source {
		entry.push(encode_source(source));
	}

	entry
}

pub fn to_canonical(entry: &Element) -> Result<Activity> {
	if entry.name != ELEMENT || namespace_of(entry) != Some(Namespace::Atom) {
		return Err(MapperError::unexpected("entry", entry));
	}

	let mut base = read_base(entry)?;
	let actors = std::mem::take(&mut base.authors);
	base.source = entry.child(Namespace::Atom.uri(), "source")
		.map(decode_source)
		.transpose()?;

	let verb = entry.child_text(Namespace::ActivityStreams.uri(), wire(ACTIVITY_STREAMS, "verb"))
		.map(|x| Verb::from(strip_schema(x.trim())));

	let object_type = read_object_type(entry);
	let embedded = entry.child(Namespace::ActivityStreams.uri(), wire(ACTIVITY_STREAMS, "object"));
	let object = match (embedded, object_type) {
		(Some(element), object_type) => Some(object::decode(element, object_type.unwrap_or(ObjectType::Note))?),
		(None, Some(ObjectType::Activity)) | (None, None) => {
			// a bare activity, unless someone wrote a body for it anyway
			if has_body(entry) {
				tracing::debug!("entry without object type has a body, reading it as a note");
				Some(body(entry, ObjectType::Note))
			} else {
				None
			}
		},
		(None, Some(object_type)) => Some(body(entry, object_type)),
	};

	let targets = entry.children_named(Namespace::ActivityStreams.uri(), wire(ACTIVITY_STREAMS, "target"))
		.map(|x| object::decode(x, ObjectType::Note))
		.collect::<Result<Vec<_>>>()?;

	let in_reply_to = entry.children_named(Namespace::Threading.uri(), thread::ELEMENT)
		.map(thread::parse)
		.collect::<Result<Vec<_>>>()?;

	Ok(Activity {
		base,
		verb,
		object: object.map(Box::new),
		targets,
		actors,
		in_reply_to,
	})
}

/// only what it takes to attribute the entry: never the source feed entries
fn encode_source(source: &Source) -> Element {
	let mut element = Namespace::Atom.element("source");
	if let Some(uid) = source.uid.as_deref().filter(|x| !x.is_empty()) {
		element.push(Namespace::Atom.element(wire(ATOM, "uid")).with_text(uid));
	}
	if let Some(title) = source.title.as_deref().filter(|x| !x.is_empty()) {
		element.push(content::encode(wire(ATOM, "title"), title, source.title_type));
	}
	if let Some(rights) = source.rights.as_deref().filter(|x| !x.is_empty()) {
		element.push(Namespace::Atom.element(wire(ATOM, "rights")).with_text(rights));
	}
	if let Some(updated) = &source.updated {
		element.push(Namespace::Atom.element(wire(ATOM, "updated")).with_text(&registry::format_timestamp(updated)));
	}
	if let Some(url) = source.url.as_deref().filter(|x| !x.is_empty()) {
		element.push(Link::new("self", url).to_element());
	}
	for author in &source.authors {
		element.push(person::from_canonical(author));
	}
	element
}

fn decode_source(element: &Element) -> Result<Source> {
	let base = read_base(element)?;
	let title = element.child(Namespace::Atom.uri(), wire(ATOM, "title")).and_then(content::decode);
	Ok(Source {
		uid: base.uid,
		url: base.url,
		title_type: title.as_ref().map(|(_, t)| *t).unwrap_or_default(),
		title: title.map(|(x, _)| x),
		rights: element.child_text(Namespace::Atom.uri(), wire(ATOM, "rights")),
		updated: base.updated,
		authors: base.authors,
	})
}
