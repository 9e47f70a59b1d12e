use crate::{activity_object, Base, Object, ObjectType, Person, ThreadReference, Verb};

/// an action taken by one or more people, see [Verb]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
	pub base: Base,
	pub verb: Option<Verb>,
	/// what is being acted upon
	pub object: Option<Box<Object>>,
	/// indirect objects of the verb
	pub targets: Vec<Object>,
	/// who is responsible for this action
	pub actors: Vec<Person>,
	pub in_reply_to: Vec<ThreadReference>,
}

activity_object! { Activity => ObjectType::Activity }

impl Activity {
	crate::setter! { verb -> Option<Verb> }
	crate::setter! { targets -> Vec<Object> }
	crate::setter! { actors -> Vec<Person> }
	crate::setter! { in_reply_to -> Vec<ThreadReference> }

	pub fn set_object(mut self, val: Option<Object>) -> Self {
		self.object = val.map(Box::new);
		self
	}

	/// who to credit for this activity: its actors, or its authors when no actor is known
	pub fn people(&self) -> &[Person] {
		if self.actors.is_empty() {
			&self.base.authors
		} else {
			&self.actors
		}
	}
}
