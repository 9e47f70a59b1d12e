use chrono::{DateTime, Utc};

use crate::{ContentType, Feed, ObjectType, Person};

/// fields shared by every canonical object
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Base {
	/// opaque identifier, unique within its feed. never generated nor interpreted here
	pub uid: Option<String>,
	/// canonical permalink
	pub url: Option<String>,
	pub published: Option<DateTime<Utc>>,
	pub updated: Option<DateTime<Utc>>,
	pub authors: Vec<Person>,
	/// where this object was copied from, if it was: only for display
	pub source: Option<Source>,
}

// source is a read-only reference to some other feed, it doesn't take part in identity
impl PartialEq for Base {
	fn eq(&self, other: &Self) -> bool {
		self.uid == other.uid
			&& self.url == other.url
			&& self.published == other.published
			&& self.updated == other.updated
			&& self.authors == other.authors
	}
}

/// shallow snapshot of the feed an item originated from, carrying only what is needed to
/// attribute it. never holds items, so it can't close a cycle back into a live feed
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Source {
	pub uid: Option<String>,
	pub url: Option<String>,
	pub title: Option<String>,
	pub title_type: ContentType,
	pub rights: Option<String>,
	pub updated: Option<DateTime<Utc>>,
	pub authors: Vec<Person>,
}

impl From<&Feed> for Source {
	fn from(feed: &Feed) -> Self {
		Source {
			uid: feed.base.uid.clone(),
			url: feed.base.url.clone(),
			title: feed.title.clone(),
			title_type: feed.title_type,
			rights: feed.rights.clone(),
			updated: feed.base.updated,
			authors: feed.base.authors.clone(),
		}
	}
}

impl Source {
	/// minimal feed holding just the attribution fields, meant for reading only
	pub fn to_feed(&self) -> Feed {
		Feed {
			base: Base {
				uid: self.uid.clone(),
				url: self.url.clone(),
				updated: self.updated,
				authors: self.authors.clone(),
				..Default::default()
			},
			title: self.title.clone(),
			title_type: self.title_type,
			rights: self.rights.clone(),
			..Default::default()
		}
	}
}

pub trait ActivityObject {
	fn base(&self) -> &Base;
	fn object_type(&self) -> ObjectType;

	fn uid(&self) -> Option<&str> { self.base().uid.as_deref() }
	fn url(&self) -> Option<&str> { self.base().url.as_deref() }
	fn published(&self) -> Option<DateTime<Utc>> { self.base().published }
	fn updated(&self) -> Option<DateTime<Utc>> { self.base().updated }
	fn authors(&self) -> &[Person] { &self.base().authors }
	fn source(&self) -> Option<&Source> { self.base().source.as_ref() }

	fn first_author(&self) -> Option<&Person> {
		self.authors().first()
	}
}

pub trait ActivityObjectMut : ActivityObject + Sized {
	fn base_mut(&mut self) -> &mut Base;

	crate::setter! { base.uid -> &str }
	crate::setter! { base.url -> &str }
	crate::setter! { base.published -> Option<DateTime<Utc>> }
	crate::setter! { base.updated -> Option<DateTime<Utc>> }
	crate::setter! { base.authors -> Vec<Person> }
	crate::setter! { base.source -> Option<Source> }
}

/// implements the object traits for a struct holding its shared fields in `base`
macro_rules! activity_object {
	($struct:ident => $t:expr) => {
		impl $crate::ActivityObject for $struct {
			fn base(&self) -> &$crate::Base {
				&self.base
			}

			fn object_type(&self) -> $crate::ObjectType {
				$t
			}
		}

		impl $crate::ActivityObjectMut for $struct {
			fn base_mut(&mut self) -> &mut $crate::Base {
				&mut self.base
			}
		}
	};
}

pub(crate) use activity_object;
