use crate::{Activity, ActivityObject};

/// one "in reply to" edge, pointing at the activity being answered
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreadReference {
	/// uid of the referenced activity
	pub reference: Option<String>,
	/// url of the referenced activity
	pub href: Option<String>,
	pub media_type: Option<String>,
	/// url of the feed holding the referenced activity
	pub source: Option<String>,
}

impl ThreadReference {
	/// partial activity carrying only what the reference knows: fetching the real thing is up
	/// to the caller
	pub fn to_activity(&self) -> Activity {
		let mut activity = Activity::default();
		activity.base.url = self.href.clone();
		activity.base.uid = self.reference.clone();
		activity
	}
}

impl From<&Activity> for ThreadReference {
	fn from(activity: &Activity) -> Self {
		ThreadReference {
			reference: activity.uid().map(|x| x.to_string()),
			href: activity.url().map(|x| x.to_string()),
			media_type: None,
			source: activity.source().and_then(|s| s.url.clone()),
		}
	}
}

#[cfg(test)]
mod test {
	use crate::{ActivityObject, ActivityObjectMut, Activity, ThreadReference};

	#[test]
	fn reference_from_activity_keeps_identity() {
		let activity = Activity::default()
			.set_uid(Some("54321"))
			.set_url(Some("http://example.com/entries/1"));
		let reference = ThreadReference::from(&activity);
		assert_eq!(reference.reference.as_deref(), Some("54321"));
		assert_eq!(reference.href.as_deref(), Some("http://example.com/entries/1"));

		let stub = reference.to_activity();
		assert_eq!(stub.uid(), Some("54321"));
		assert_eq!(stub.url(), Some("http://example.com/entries/1"));
		assert!(stub.object.is_none());
	}
}
