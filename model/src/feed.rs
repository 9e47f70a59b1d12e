use crate::{activity_object, Activity, Base, ContentType, ObjectType, Person};

/// ordered stream of activities, as published by someone
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feed {
	pub base: Base,
	pub title: Option<String>,
	pub title_type: ContentType,
	pub subtitle: Option<String>,
	pub subtitle_type: ContentType,
	pub rights: Option<String>,
	pub icon: Option<String>,
	pub logo: Option<String>,
	pub categories: Vec<Category>,
	pub contributors: Vec<Person>,
	pub items: Vec<Activity>,
	/// PubSubHubbub endpoints, in order of preference
	pub hubs: Vec<String>,
	/// where replies and mentions should be delivered
	pub salmon_url: Option<String>,
	pub display_name: Option<String>,
	/// declared size of the whole collection: paginated feeds carry fewer items than this
	pub total_items: Option<u64>,
	pub generator: Option<Generator>,
}

activity_object! { Feed => ObjectType::Feed }

impl Feed {
	crate::setter! { title -> &str }
	crate::setter! { title_type -> ContentType }
	crate::setter! { subtitle -> &str }
	crate::setter! { subtitle_type -> ContentType }
	crate::setter! { rights -> &str }
	crate::setter! { icon -> &str }
	crate::setter! { logo -> &str }
	crate::setter! { categories -> Vec<Category> }
	crate::setter! { contributors -> Vec<Person> }
	crate::setter! { items -> Vec<Activity> }
	crate::setter! { hubs -> Vec<String> }
	crate::setter! { salmon_url -> &str }
	crate::setter! { display_name -> &str }
	crate::setter! { total_items -> Option<u64> }
	crate::setter! { generator -> Option<Generator> }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
	pub term: String,
	pub label: Option<String>,
	pub scheme: Option<String>,
}

impl Category {
	pub fn new(term: &str) -> Self {
		Category {
			term: term.to_string(),
			label: None,
			scheme: None,
		}
	}
}

/// software that produced a feed
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generator {
	pub name: Option<String>,
	pub uri: Option<String>,
	pub version: Option<String>,
}
