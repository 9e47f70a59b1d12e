//! objects an activity acts upon, either embedded as `activity:object` / `activity:target` or
//! flattened into the entry holding them

use nenuphar_model::{
	ActivityObject, ActivityObjectMut, Base, ContentType, Generic, MediaLink, Note, Object, ObjectType, Video,
};

use crate::content;
use crate::error::Result;
use crate::link::{links_of, links_with_rel, resolve_self_url, Link};
use crate::person;
use crate::registry::{self, namespace_of, person_key, schema_uri, strip_schema, wire, Namespace, ACTIVITY_STREAMS, ATOM};
use crate::xml::Element;

/// objects carrying an identity of their own need their own element, anonymous ones can ride
/// along the entry fields. `activity` and `person` already mean something on a bare entry, so
/// objects of those types are always embedded
pub fn is_embedded(object: &Object) -> bool {
	matches!(object.object_type(), ObjectType::Activity | ObjectType::Person)
		|| *object.base() != Base::default()
}

/// `name` is the ActivityStreams element to produce, `object` or `target`
pub fn encode(object: &Object, name: &str) -> Element {
	if let Object::Person(x) = object {
		return person::encode(x, Namespace::ActivityStreams, name);
	}

	let mut element = Namespace::ActivityStreams.element(name);
	if let Some(uid) = object.uid().filter(|x| !x.is_empty()) {
		element.push(Namespace::Atom.element(wire(ATOM, "uid")).with_text(uid));
	}
	element.push(object_type_element(&object.object_type()));
	push_body(&mut element, object);
	push_base(&mut element, object.base(), "alternate");
	element
}

pub fn decode(element: &Element, fallback: ObjectType) -> Result<Object> {
	let object_type = read_object_type(element).unwrap_or(fallback);

	// a person typed object with a body and no profile field is not a profile
	if object_type == ObjectType::Person && (has_profile(element) || !has_body(element)) {
		return Ok(Object::Person(person::to_canonical(element)?));
	}

	let base = read_base(element)?;
	let mut object = body(element, object_type);
	*object.base_mut() = base;
	Ok(object)
}

pub fn object_type_element(object_type: &ObjectType) -> Element {
	Namespace::ActivityStreams.element(wire(ACTIVITY_STREAMS, "object_type"))
		.with_text(&schema_uri(object_type.as_ref()))
}

pub fn read_object_type(element: &Element) -> Option<ObjectType> {
	element.child_text(Namespace::ActivityStreams.uri(), wire(ACTIVITY_STREAMS, "object_type"))
		.map(|x| ObjectType::from(strip_schema(x.trim())))
}

/// title, content and media links of an object, everything but its identity
pub fn push_body(element: &mut Element, object: &Object) {
	if matches!(object, Object::Person(_)) {
		return; // profile fields are not a body
	}
	if let Some(title) = object.title().filter(|x| !x.is_empty()) {
		element.push(content::encode(wire(ATOM, "title"), title, ContentType::Text));
	}
	if let Some((text, content_type)) = object.content().filter(|(x, _)| !x.is_empty()) {
		element.push(content::encode(wire(ATOM, "content"), text, content_type));
	}
	if let Object::Video(Video { stream: Some(stream), .. }) = object {
		element.push(Link {
			rel: Some("enclosure".to_string()),
			href: Some(stream.href.clone()),
			media_type: stream.media_type.clone(),
			length: stream.length,
			..Default::default()
		}.to_element());
	}
}

/// whether the element has a title, summary or content block
pub fn has_body(element: &Element) -> bool {
	["title", "summary", "content"].into_iter()
		.any(|key| element.child(Namespace::Atom.uri(), wire(ATOM, key)).is_some())
}

fn has_profile(element: &Element) -> bool {
	element.elements()
		.any(|x| namespace_of(x).is_some_and(|ns| person_key(ns, &x.name).is_some()))
}

/// inverse of [push_body], builds an object of the given type with no identity. the summary
/// stands in for the content when there is none
pub fn body(element: &Element, object_type: ObjectType) -> Object {
	let atom = Namespace::Atom.uri();
	let title = element.child(atom, wire(ATOM, "title"))
		.and_then(content::decode)
		.map(|(text, _)| text);
	let content = element.child(atom, wire(ATOM, "content"))
		.and_then(content::decode)
		.or_else(|| element.child(atom, wire(ATOM, "summary")).and_then(content::decode));

	match object_type {
		ObjectType::Note => Object::Note(Note {
			title,
			html: content.map(|(text, _)| text),
			..Default::default()
		}),
		ObjectType::Video => Object::Video(Video {
			title,
			embed_code: content.map(|(text, _)| text),
			stream: links_with_rel(&links_of(element), "enclosure")
				.into_iter()
				.find_map(|l| Some(MediaLink {
					href: l.href.clone()?,
					media_type: l.media_type.clone(),
					length: l.length,
				})),
			..Default::default()
		}),
		other => {
			let mut generic = Generic::new(other);
			generic.title = title;
			if let Some((text, content_type)) = content {
				generic.content = Some(text);
				generic.content_type = content_type;
			}
			Object::Generic(generic)
		},
	}
}

/// url link, timestamps and authors. uid is left to the caller, which decides where it goes
pub fn push_base(element: &mut Element, base: &Base, rel: &str) {
	if let Some(url) = base.url.as_deref().filter(|x| !x.is_empty()) {
		element.push(Link::new(rel, url).to_element());
	}
	if let Some(published) = &base.published {
		element.push(Namespace::Atom.element(wire(ATOM, "published")).with_text(&registry::format_timestamp(published)));
	}
	if let Some(updated) = &base.updated {
		element.push(Namespace::Atom.element(wire(ATOM, "updated")).with_text(&registry::format_timestamp(updated)));
	}
	for author in &base.authors {
		element.push(person::from_canonical(author));
	}
}

pub fn read_base(element: &Element) -> Result<Base> {
	let atom = Namespace::Atom.uri();
	let timestamp = |key: &'static str| element.child_text(atom, wire(ATOM, key))
		.map(|x| registry::parse_timestamp(wire(ATOM, key), &x))
		.transpose();

	// media streams are published as enclosures, they are not where the object lives
	let links : Vec<Link> = links_of(element)
		.into_iter()
		.filter(|l| !l.is("enclosure"))
		.collect();

	Ok(Base {
		uid: element.child_text(atom, wire(ATOM, "uid")),
		url: resolve_self_url(&links),
		published: timestamp("published")?,
		updated: timestamp("updated")?,
		authors: element.children_named(atom, "author")
			.map(person::to_canonical)
			.collect::<Result<Vec<_>>>()?,
		source: None,
	})
}

#[cfg(test)]
mod test {
	use nenuphar_model::{
		ActivityObject, ActivityObjectMut, ContentType, Generic, MediaLink, Note, Object, ObjectType, Person, Video,
	};

	use super::{decode, encode, is_embedded};

	#[test]
	fn anonymous_objects_are_flattened() {
		assert!(!is_embedded(&Object::from(Note::default().set_html(Some("hi")))));
		assert!(is_embedded(&Object::from(Note::default().set_uid(Some("1")))));
		assert!(is_embedded(&Object::from(Person::default())));
	}

	#[test]
	fn notes_round_trip() {
		let note = Object::from(
			Note::default()
				.set_uid(Some("tag:example.com,2011:note/1"))
				.set_url(Some("http://example.com/notes/1"))
				.set_title(Some("hi"))
				.set_html(Some("<p>hello</p>"))
				.set_authors(vec![Person::default().set_name(Some("wilkie"))])
		);
		let element = encode(&note, "object");
		assert_eq!(
			element.child_text("http://activitystrea.ms/spec/1.0/", "object-type").as_deref(),
			Some("http://activitystrea.ms/schema/1.0/note"),
		);
		assert_eq!(decode(&element, ObjectType::Note).expect("valid object"), note);
	}

	#[test]
	fn videos_keep_their_stream() {
		let video = Object::from(
			Video::default()
				.set_uid(Some("v1"))
				.set_url(Some("http://example.com/videos/1"))
				.set_embed_code(Some("<iframe src=\"http://example.com/embed/1\"></iframe>"))
				.set_stream(Some(MediaLink {
					href: "http://example.com/videos/1.webm".into(),
					media_type: Some("video/webm".into()),
					length: Some(4096),
				}))
		);
		assert_eq!(decode(&encode(&video, "object"), ObjectType::Note).expect("valid object"), video);
	}

	#[test]
	fn unknown_types_become_generic() {
		let thing = Object::from(
			Generic::new(ObjectType::from("http://example.com/types/tortoise"))
				.set_uid(Some("t1"))
				.set_content(Some("slow"))
				.set_content_type(ContentType::Text)
		);
		let decoded = decode(&encode(&thing, "target"), ObjectType::Note).expect("valid object");
		assert_eq!(decoded, thing);
		assert_eq!(decoded.object_type().as_ref(), "http://example.com/types/tortoise");
	}

	#[test]
	fn generic_activities_and_persons_keep_their_variant() {
		let activity = Object::from(Generic::new(ObjectType::Activity).set_content(Some("x")));
		let person = Object::from(Generic::new(ObjectType::Person).set_title(Some("somebody")));
		for object in [activity, person] {
			assert!(is_embedded(&object));
			assert_eq!(decode(&encode(&object, "object"), ObjectType::Note).expect("valid object"), object);
		}
	}

	#[test]
	fn summary_is_read_when_content_is_missing() {
		use crate::registry::Namespace;
		let element = Namespace::ActivityStreams.element("object")
			.with_child(Namespace::Atom.element("summary").with_attribute("type", "html").with_text("<p>short</p>"));
		assert_eq!(
			decode(&element, ObjectType::Note).expect("valid object"),
			Object::from(Note::default().set_html(Some("<p>short</p>"))),
		);
		let element = element.with_child(Namespace::Atom.element("content").with_attribute("type", "html").with_text("<p>long</p>"));
		assert_eq!(
			decode(&element, ObjectType::Note).expect("valid object"),
			Object::from(Note::default().set_html(Some("<p>long</p>"))),
		);
	}

	#[test]
	fn missing_type_uses_fallback() {
		let element = crate::registry::Namespace::ActivityStreams.element("object");
		assert_eq!(decode(&element, ObjectType::Note).expect("valid object"), Object::from(Note::default()));
	}

	#[test]
	fn persons_are_embedded_with_their_profile() {
		let person = Object::from(Person::default().set_uid(Some("42")).set_display_name(Some("wilkie")));
		let element = encode(&person, "object");
		assert_eq!(element.name, "object");
		assert_eq!(decode(&element, ObjectType::Note).expect("valid object"), person);
	}
}
