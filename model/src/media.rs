use crate::{activity_object, Base, ContentType, ObjectType};

/// short text post
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
	pub base: Base,
	pub title: Option<String>,
	/// body of the note, as html markup
	pub html: Option<String>,
}

activity_object! { Note => ObjectType::Note }

impl Note {
	crate::setter! { title -> &str }
	crate::setter! { html -> &str }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
	pub base: Base,
	pub title: Option<String>,
	/// html fragment which, embedded in another page, plays the stream
	pub embed_code: Option<String>,
	pub stream: Option<MediaLink>,
}

activity_object! { Video => ObjectType::Video }

impl Video {
	crate::setter! { title -> &str }
	crate::setter! { embed_code -> &str }
	crate::setter! { stream -> Option<MediaLink> }
}

/// pointer to some media resource
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaLink {
	pub href: String,
	pub media_type: Option<String>,
	/// size in bytes
	pub length: Option<u64>,
}

/// any object type without a dedicated struct: keeps its type tag, a title and a body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generic {
	pub object_type: ObjectType,
	pub base: Base,
	pub title: Option<String>,
	pub content: Option<String>,
	pub content_type: ContentType,
}

impl Generic {
	pub fn new(object_type: ObjectType) -> Self {
		Generic {
			object_type,
			base: Base::default(),
			title: None,
			content: None,
			content_type: ContentType::default(),
		}
	}

	crate::setter! { title -> &str }
	crate::setter! { content -> &str }
	crate::setter! { content_type -> ContentType }
}

impl crate::ActivityObject for Generic {
	fn base(&self) -> &Base {
		&self.base
	}

	fn object_type(&self) -> ObjectType {
		self.object_type.clone()
	}
}

impl crate::ActivityObjectMut for Generic {
	fn base_mut(&mut self) -> &mut Base {
		&mut self.base
	}
}
