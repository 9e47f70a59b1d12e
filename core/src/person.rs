//! people as Atom authors, decorated with their PortableContacts profile

use std::collections::BTreeMap;

use nenuphar_model::{Account, Address, ExtendedName, ObjectType, Organization, Person};

use crate::error::Result;
use crate::link::{links_of, resolve_self_url, Link};
use crate::registry::{
	self, namespace_of, person_element, person_key, schema_uri, wire, Field, Namespace, PersonKey,
	ACTIVITY_STREAMS, POCO_ACCOUNT, POCO_ADDRESS, POCO_NAME, POCO_ORGANIZATION, PORTABLE_CONTACTS,
};
use crate::xml::Element;

/// encodes `person` into an element called `name` in namespace `namespace`: the same profile
/// is published as author, contributor or embedded activity object
pub fn encode(person: &Person, namespace: Namespace, name: &str) -> Element {
	let mut element = namespace.element(name);

	let fields : [(&'static str, Option<String>); 14] = [
		("name", person.name.clone()),
		("email", person.email.clone()),
		("uri", person.uri.clone()),
		("uid", person.base.uid.clone()),
		("display_name", person.display_name.clone()),
		("preferred_username", person.preferred_username.clone()),
		("nickname", person.nickname.clone()),
		("gender", person.gender.clone()),
		("note", person.note.clone()),
		("birthday", person.birthday.as_ref().map(registry::format_date)),
		("anniversary", person.anniversary.as_ref().map(registry::format_date)),
		("published", person.base.published.as_ref().map(registry::format_timestamp)),
		("updated", person.base.updated.as_ref().map(registry::format_timestamp)),
		("pronoun", person.pronoun.clone()),
	];

	for (key, value) in fields {
		if let Some(value) = not_blank(value) {
			let (ns, tag) = person_element(key);
			element.push(ns.element(&tag).with_text(&value));
		}
	}

	element.push(
		Namespace::ActivityStreams.element(wire(ACTIVITY_STREAMS, "object_type"))
			.with_text(&schema_uri(ObjectType::Person.as_ref()))
	);

	if let Some(url) = not_blank(person.base.url.clone()) {
		element.push(Link::new("alternate", &url).to_element());
	}

	if let Some(x) = &person.extended_name {
		push_record(&mut element, "extended_name", POCO_NAME, vec![
			("formatted", x.formatted.clone()),
			("family_name", x.family_name.clone()),
			("given_name", x.given_name.clone()),
			("middle_name", x.middle_name.clone()),
			("honorific_prefix", x.honorific_prefix.clone()),
			("honorific_suffix", x.honorific_suffix.clone()),
		]);
	}

	if let Some(x) = &person.organization {
		push_record(&mut element, "organization", POCO_ORGANIZATION, vec![
			("name", x.name.clone()),
			("department", x.department.clone()),
			("title", x.title.clone()),
			("organization_type", x.organization_type.clone()),
			("start_date", x.start_date.as_ref().map(registry::format_date)),
			("end_date", x.end_date.as_ref().map(registry::format_date)),
			("location", x.location.clone()),
			("description", x.description.clone()),
		]);
	}

	if let Some(x) = &person.address {
		push_record(&mut element, "address", POCO_ADDRESS, vec![
			("formatted", x.formatted.clone()),
			("street_address", x.street_address.clone()),
			("locality", x.locality.clone()),
			("region", x.region.clone()),
			("postal_code", x.postal_code.clone()),
			("country", x.country.clone()),
		]);
	}

	if let Some(x) = &person.account {
		push_record(&mut element, "account", POCO_ACCOUNT, vec![
			("domain", x.domain.clone()),
			("username", x.username.clone()),
			("userid", x.userid.clone()),
		]);
	}

	for (key, value) in &person.extensions {
		if value.is_empty() {
			continue;
		}
		if !is_element_name(key) {
			tracing::warn!("not publishing profile field '{key}': not usable as an element name");
			continue;
		}
		let (ns, tag) = person_element(key);
		match person_key(ns, &tag) {
			Some(PersonKey::Extension(_)) => element.push(ns.element(&tag).with_text(value)),
			_ => tracing::warn!("not publishing profile field '{key}': it would shadow a known field"),
		}
	}

	element
}

pub fn from_canonical(person: &Person) -> Element {
	encode(person, Namespace::Atom, "author")
}

/// reads back any person element, whatever its name. unknown PortableContacts children end up
/// in the extensions, everything else we don't know is skipped
pub fn to_canonical(element: &Element) -> Result<Person> {
	let mut person = Person::default();

	for child in element.elements() {
		let Some(ns) = namespace_of(child) else { continue };

		if ns == Namespace::Atom && child.name == "id" {
			// embedded objects sometimes carry their identity as plain atom
			if person.base.uid.is_none() {
				person.base.uid = not_blank(Some(child.text()));
			}
			continue;
		}

		match person_key(ns, &child.name) {
			Some(PersonKey::Known(key)) => read_field(&mut person, key, child)?,
			Some(PersonKey::Extension(tag)) => {
				if let Some(value) = not_blank(Some(child.text())) {
					person.extensions.insert(tag, value);
				}
			},
			None => {},
		}
	}

	person.base.url = resolve_self_url(&links_of(element));

	Ok(person)
}

fn read_field(person: &mut Person, key: &'static str, element: &Element) -> Result<()> {
	let field = wire(PORTABLE_CONTACTS, key);
	let text = || not_blank(Some(element.text()));

	match key {
		"name" => person.name = text(),
		"email" => person.email = text(),
		"uri" => person.uri = text(),
		"pronoun" => person.pronoun = text(),
		"uid" => person.base.uid = text(),
		"display_name" => person.display_name = text(),
		"preferred_username" => person.preferred_username = text(),
		"nickname" => person.nickname = text(),
		"gender" => person.gender = text(),
		"note" => person.note = text(),
		"birthday" => person.birthday = text().map(|x| registry::parse_date(field, &x)).transpose()?,
		"anniversary" => person.anniversary = text().map(|x| registry::parse_date(field, &x)).transpose()?,
		"published" => person.base.published = text().map(|x| registry::parse_timestamp(field, &x)).transpose()?,
		"updated" => person.base.updated = text().map(|x| registry::parse_timestamp(field, &x)).transpose()?,
		"extended_name" => {
			let mut x = read_record(element, POCO_NAME);
			person.extended_name = Some(ExtendedName {
				formatted: x.remove("formatted"),
				family_name: x.remove("family_name"),
				given_name: x.remove("given_name"),
				middle_name: x.remove("middle_name"),
				honorific_prefix: x.remove("honorific_prefix"),
				honorific_suffix: x.remove("honorific_suffix"),
			});
		},
		"organization" => {
			let mut x = read_record(element, POCO_ORGANIZATION);
			let date = |value: Option<String>, key: &'static str| value
				.map(|v| registry::parse_date(wire(POCO_ORGANIZATION, key), &v))
				.transpose();
			person.organization = Some(Organization {
				name: x.remove("name"),
				department: x.remove("department"),
				title: x.remove("title"),
				organization_type: x.remove("organization_type"),
				start_date: date(x.remove("start_date"), "start_date")?,
				end_date: date(x.remove("end_date"), "end_date")?,
				location: x.remove("location"),
				description: x.remove("description"),
			});
		},
		"address" => {
			let mut x = read_record(element, POCO_ADDRESS);
			person.address = Some(Address {
				formatted: x.remove("formatted"),
				street_address: x.remove("street_address"),
				locality: x.remove("locality"),
				region: x.remove("region"),
				postal_code: x.remove("postal_code"),
				country: x.remove("country"),
			});
		},
		"account" => {
			let mut x = read_record(element, POCO_ACCOUNT);
			person.account = Some(Account {
				domain: x.remove("domain"),
				username: x.remove("username"),
				userid: x.remove("userid"),
			});
		},
		_ => tracing::debug!("ignoring person field '{key}'"),
	}

	Ok(())
}

/// records with nothing but blank fields are left out entirely
fn push_record(element: &mut Element, key: &'static str, table: &'static [Field], values: Vec<(&'static str, Option<String>)>) {
	let (ns, tag) = person_element(key);
	let mut record = ns.element(&tag);
	for (key, value) in values {
		if let Some(value) = not_blank(value) {
			record.push(Namespace::Atom.element(wire(table, key)).with_text(&value));
		}
	}
	if !record.children.is_empty() {
		element.push(record);
	}
}

// matched on local name only: some publishers qualify record children with the poco namespace
fn read_record(element: &Element, table: &'static [Field]) -> BTreeMap<&'static str, String> {
	let mut out = BTreeMap::new();
	for child in element.elements() {
		match table.iter().find(|f| f.name == child.name) {
			Some(f) => {
				if let Some(value) = not_blank(Some(child.text())) {
					out.insert(f.key, value);
				}
			},
			None => tracing::debug!("ignoring unknown <{}> in <{}>", child.name, element.name),
		}
	}
	out
}

/// whitespace only values are dropped like empty ones: the parser treats them as formatting, so
/// they could not be read back anyway. anything else is kept verbatim
fn not_blank(value: Option<String>) -> Option<String> {
	value.filter(|x| !x.trim().is_empty())
}

fn is_element_name(key: &str) -> bool {
	let mut chars = key.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.')),
		_ => false,
	}
}

#[cfg(test)]
mod test {
	use chrono::NaiveDate;
	use nenuphar_model::{ActivityObjectMut, Organization, Person};

	use super::{from_canonical, to_canonical};
	use crate::registry::Namespace;

	const POCO: &str = "http://portablecontacts.net/spec/1.0";
	const ATOM: &str = "http://www.w3.org/2005/Atom";

	fn wilkie() -> Person {
		Person::default()
			.set_uid(Some("1234"))
			.set_url(Some("http://example.com/users/wilkie"))
			.set_name(Some("wilkie"))
			.set_uri(Some("http://example.com/users/wilkie"))
			.set_email(Some("wilkie@example.com"))
			.set_display_name(Some("Dave Wilkinson"))
			.set_preferred_username(Some("wilkie"))
			.set_birthday(NaiveDate::from_ymd_opt(1985, 2, 3))
			.set_pronoun(Some("they"))
			.set_organization(Some(Organization { name: Some("Hackers".into()), ..Default::default() }))
	}

	#[test]
	fn profile_fields_are_renamed_into_portable_contacts() {
		let element = from_canonical(&wilkie());
		assert_eq!(element.child_text(ATOM, "name").as_deref(), Some("wilkie"));
		assert_eq!(element.child_text(POCO, "id").as_deref(), Some("1234"));
		assert_eq!(element.child_text(POCO, "displayName").as_deref(), Some("Dave Wilkinson"));
		assert_eq!(element.child_text(POCO, "preferredUsername").as_deref(), Some("wilkie"));
		assert_eq!(element.child_text(POCO, "birthday").as_deref(), Some("1985-02-03"));
		assert_eq!(
			element.child_text(Namespace::ActivityStreams.uri(), "object-type").as_deref(),
			Some("http://activitystrea.ms/schema/1.0/person"),
		);
	}

	#[test]
	fn pronoun_is_unprefixed() {
		let element = from_canonical(&wilkie());
		assert_eq!(element.child_text(ATOM, "pronoun").as_deref(), Some("they"));
		assert!(element.child(POCO, "pronoun").is_none());
	}

	#[test]
	fn blank_sub_record_fields_are_suppressed() {
		let element = from_canonical(&wilkie());
		let org = element.child(POCO, "organization").expect("organization is present");
		assert_eq!(org.elements().count(), 1);
		assert_eq!(org.child_text(ATOM, "name").as_deref(), Some("Hackers"));

		let element = from_canonical(&wilkie().set_organization(None));
		assert!(element.child(POCO, "organization").is_none());

		let element = from_canonical(&wilkie().set_organization(Some(Organization::default())));
		assert!(element.child(POCO, "organization").is_none());
	}

	#[test]
	fn blank_values_are_dropped() {
		let element = from_canonical(&Person::default().set_name(Some("")).set_gender(Some("  ")));
		assert!(element.child(ATOM, "name").is_none());
		assert!(element.child(POCO, "gender").is_none());

		let person = Person::default().set_nickname(Some(" wilkie "));
		let element = from_canonical(&person);
		assert_eq!(element.child_text(POCO, "nickname").as_deref(), Some(" wilkie "));
		assert_eq!(to_canonical(&element).expect("valid author"), person);
	}

	#[test]
	fn round_trip() {
		let person = wilkie();
		assert_eq!(to_canonical(&from_canonical(&person)).expect("valid author"), person);
	}

	#[test]
	fn absent_fields_read_as_none() {
		let person = to_canonical(&Namespace::Atom.element("author")).expect("valid author");
		assert_eq!(person, Person::default());
	}

	#[test]
	fn custom_fields_default_to_portable_contacts() {
		let person = Person::default().set_extension("mood", Some("sleepy"));
		let element = from_canonical(&person);
		assert_eq!(element.child_text(POCO, "mood").as_deref(), Some("sleepy"));
		assert_eq!(to_canonical(&element).expect("valid author"), person);
	}

	#[test]
	fn custom_fields_never_shadow_known_ones() {
		let person = Person::default()
			.set_display_name(Some("real"))
			.set_extension("displayName", Some("fake"))
			.set_extension("not a name", Some("x"));
		let element = from_canonical(&person);
		assert_eq!(element.children_named(POCO, "displayName").count(), 1);
		assert_eq!(element.child_text(POCO, "displayName").as_deref(), Some("real"));
		assert_eq!(to_canonical(&element).expect("valid author").extensions.len(), 0);
	}

	#[test]
	fn invalid_dates_are_errors() {
		let element = Namespace::Atom.element("author")
			.with_child(Namespace::PortableContacts.element("birthday").with_text("someday"));
		assert!(to_canonical(&element).is_err());
	}
}
