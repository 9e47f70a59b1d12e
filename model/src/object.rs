use crate::{ActivityObject, ActivityObjectMut, Base, ContentType, Generic, Note, ObjectType, Person, Video};

/// anything an activity can act upon
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Object {
	Note(Note),
	Video(Video),
	Person(Person),
	Generic(Generic),
}

impl Object {
	pub fn title(&self) -> Option<&str> {
		match self {
			Object::Note(x) => x.title.as_deref(),
			Object::Video(x) => x.title.as_deref(),
			Object::Person(x) => x.display_label(),
			Object::Generic(x) => x.title.as_deref(),
		}
	}

	/// textual body and how to read it
	pub fn content(&self) -> Option<(&str, ContentType)> {
		match self {
			Object::Note(x) => Some((x.html.as_deref()?, ContentType::Html)),
			Object::Video(x) => Some((x.embed_code.as_deref()?, ContentType::Html)),
			Object::Person(_) => None,
			Object::Generic(x) => Some((x.content.as_deref()?, x.content_type)),
		}
	}

	pub fn as_person(&self) -> Option<&Person> {
		match self {
			Object::Person(x) => Some(x),
			_ => None,
		}
	}
}

impl ActivityObject for Object {
	fn base(&self) -> &Base {
		match self {
			Object::Note(x) => x.base(),
			Object::Video(x) => x.base(),
			Object::Person(x) => x.base(),
			Object::Generic(x) => x.base(),
		}
	}

	fn object_type(&self) -> ObjectType {
		match self {
			Object::Note(x) => x.object_type(),
			Object::Video(x) => x.object_type(),
			Object::Person(x) => x.object_type(),
			Object::Generic(x) => x.object_type(),
		}
	}
}

impl ActivityObjectMut for Object {
	fn base_mut(&mut self) -> &mut Base {
		match self {
			Object::Note(x) => x.base_mut(),
			Object::Video(x) => x.base_mut(),
			Object::Person(x) => x.base_mut(),
			Object::Generic(x) => x.base_mut(),
		}
	}
}

impl From<Note> for Object {
	fn from(value: Note) -> Self {
		Object::Note(value)
	}
}

impl From<Video> for Object {
	fn from(value: Video) -> Self {
		Object::Video(value)
	}
}

impl From<Person> for Object {
	fn from(value: Person) -> Self {
		Object::Person(value)
	}
}

impl From<Generic> for Object {
	fn from(value: Generic) -> Self {
		Object::Generic(value)
	}
}

#[cfg(test)]
mod test {
	use crate::{ActivityObject, ContentType, Generic, Note, Object, ObjectType, Person};

	#[test]
	fn object_type_follows_the_variant() {
		assert_eq!(Object::from(Note::default()).object_type(), ObjectType::Note);
		assert_eq!(Object::from(Person::default()).object_type(), ObjectType::Person);
		assert_eq!(
			Object::from(Generic::new(ObjectType::from("tortoise"))).object_type(),
			ObjectType::Other("tortoise".to_string()),
		);
	}

	#[test]
	fn notes_carry_html_content() {
		let note = Object::from(Note::default().set_title(Some("hi")).set_html(Some("<b>hello</b>")));
		assert_eq!(note.title(), Some("hi"));
		assert_eq!(note.content(), Some(("<b>hello</b>", ContentType::Html)));
	}
}
