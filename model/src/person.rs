use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{activity_object, Base, ObjectType};

/// someone (or something) acting in the social graph, with a PortableContacts profile
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
	pub base: Base,

	pub name: Option<String>,
	pub email: Option<String>,
	pub uri: Option<String>,

	pub nickname: Option<String>,
	pub display_name: Option<String>,
	pub preferred_username: Option<String>,
	pub gender: Option<String>,
	pub note: Option<String>,
	pub birthday: Option<NaiveDate>,
	pub anniversary: Option<NaiveDate>,
	/// free-form, kept outside of the PortableContacts vocabulary on the wire
	pub pronoun: Option<String>,

	pub extended_name: Option<ExtendedName>,
	pub organization: Option<Organization>,
	pub address: Option<Address>,
	pub account: Option<Account>,

	/// custom profile fields, keyed by the element name they are published under
	pub extensions: BTreeMap<String, String>,
}

activity_object! { Person => ObjectType::Person }

impl Person {
	crate::setter! { name -> &str }
	crate::setter! { email -> &str }
	crate::setter! { uri -> &str }
	crate::setter! { nickname -> &str }
	crate::setter! { display_name -> &str }
	crate::setter! { preferred_username -> &str }
	crate::setter! { gender -> &str }
	crate::setter! { note -> &str }
	crate::setter! { birthday -> Option<NaiveDate> }
	crate::setter! { anniversary -> Option<NaiveDate> }
	crate::setter! { pronoun -> &str }
	crate::setter! { extended_name -> Option<ExtendedName> }
	crate::setter! { organization -> Option<Organization> }
	crate::setter! { address -> Option<Address> }
	crate::setter! { account -> Option<Account> }

	pub fn set_extension(mut self, key: &str, val: Option<&str>) -> Self {
		match val {
			Some(v) => self.extensions.insert(key.to_string(), v.to_string()),
			None => self.extensions.remove(key),
		};
		self
	}

	/// best name to show for this person
	pub fn display_label(&self) -> Option<&str> {
		self.display_name.as_deref()
			.or(self.name.as_deref())
			.or(self.preferred_username.as_deref())
			.or(self.nickname.as_deref())
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedName {
	pub formatted: Option<String>,
	pub family_name: Option<String>,
	pub given_name: Option<String>,
	pub middle_name: Option<String>,
	pub honorific_prefix: Option<String>,
	pub honorific_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Organization {
	pub name: Option<String>,
	pub department: Option<String>,
	pub title: Option<String>,
	pub organization_type: Option<String>,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
	pub location: Option<String>,
	pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
	pub formatted: Option<String>,
	pub street_address: Option<String>,
	pub locality: Option<String>,
	pub region: Option<String>,
	pub postal_code: Option<String>,
	pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
	pub domain: Option<String>,
	pub username: Option<String>,
	pub userid: Option<String>,
}

#[cfg(test)]
mod test {
	use super::Person;

	#[test]
	fn display_label_prefers_display_name() {
		let person = Person::default()
			.set_name(Some("wilkie"))
			.set_display_name(Some("Dave Wilkinson"));
		assert_eq!(person.display_label(), Some("Dave Wilkinson"));
		assert_eq!(Person::default().set_nickname(Some("dw")).display_label(), Some("dw"));
	}

	#[test]
	fn extensions_can_be_added_and_removed() {
		let person = Person::default()
			.set_extension("mood", Some("sleepy"))
			.set_extension("status", Some("away"))
			.set_extension("status", None);
		assert_eq!(person.extensions.len(), 1);
		assert_eq!(person.extensions.get("mood").map(String::as_str), Some("sleepy"));
	}
}
