//! wire vocabulary: which namespace and element name every canonical field travels under, and
//! how its value is spelled

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::{MapperError, Result};
use crate::xml::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
	Atom,
	PortableContacts,
	ActivityStreams,
	Threading,
}

impl Namespace {
	pub const fn uri(self) -> &'static str {
		match self {
			Namespace::Atom => "http://www.w3.org/2005/Atom",
			Namespace::PortableContacts => "http://portablecontacts.net/spec/1.0",
			Namespace::ActivityStreams => "http://activitystrea.ms/spec/1.0/",
			Namespace::Threading => "http://purl.org/syndication/thread/1.0",
		}
	}

	/// prefix used when writing, empty for the default namespace
	pub const fn prefix(self) -> &'static str {
		match self {
			Namespace::Atom => "",
			Namespace::PortableContacts => "poco",
			Namespace::ActivityStreams => "activity",
			Namespace::Threading => "thr",
		}
	}

	pub fn from_uri(uri: &str) -> Option<Self> {
		[Namespace::Atom, Namespace::PortableContacts, Namespace::ActivityStreams, Namespace::Threading]
			.into_iter()
			.find(|ns| ns.uri() == uri)
	}

	pub fn element(self, name: &str) -> Element {
		Element::new(self.uri(), name)
	}
}

/// namespace an element lives in. unqualified elements count as Atom: sloppy publishers omit
/// the default namespace entirely
pub fn namespace_of(element: &Element) -> Option<Namespace> {
	match element.namespace.as_deref() {
		None => Some(Namespace::Atom),
		Some(uri) => Namespace::from_uri(uri),
	}
}

/// declared on the root of every written document
pub const PREFIXES : [(&str, &str); 4] = [
	(Namespace::Atom.prefix(), Namespace::Atom.uri()),
	(Namespace::PortableContacts.prefix(), Namespace::PortableContacts.uri()),
	(Namespace::ActivityStreams.prefix(), Namespace::ActivityStreams.uri()),
	(Namespace::Threading.prefix(), Namespace::Threading.uri()),
];

/// object types and verbs are published as uris under this base
pub const SCHEMA : &str = "http://activitystrea.ms/schema/1.0/";

pub fn schema_uri(term: &str) -> String {
	if term.contains("://") {
		term.to_string() // already absolute, published by someone else's vocabulary
	} else {
		format!("{SCHEMA}{term}")
	}
}

pub fn strip_schema(uri: &str) -> &str {
	uri.strip_prefix(SCHEMA).unwrap_or(uri)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
	Text,
	/// rfc3339 instant
	Timestamp,
	/// calendar day, yyyy-mm-dd
	Date,
	/// text with a sibling `type` attribute, see [crate::content]
	Content,
	Uri,
	/// nested element holding its own fields
	Record,
	/// decimal count
	Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
	pub key: &'static str,
	pub namespace: Namespace,
	pub name: &'static str,
	pub encoding: Encoding,
}

const fn field(key: &'static str, namespace: Namespace, name: &'static str, encoding: Encoding) -> Field {
	Field { key, namespace, name, encoding }
}

pub const ATOM : &[Field] = &[
	field("uid", Namespace::Atom, "id", Encoding::Uri),
	field("title", Namespace::Atom, "title", Encoding::Content),
	field("subtitle", Namespace::Atom, "subtitle", Encoding::Content),
	field("summary", Namespace::Atom, "summary", Encoding::Content),
	field("content", Namespace::Atom, "content", Encoding::Content),
	field("rights", Namespace::Atom, "rights", Encoding::Text),
	field("icon", Namespace::Atom, "icon", Encoding::Uri),
	field("logo", Namespace::Atom, "logo", Encoding::Uri),
	field("published", Namespace::Atom, "published", Encoding::Timestamp),
	field("updated", Namespace::Atom, "updated", Encoding::Timestamp),
	field("name", Namespace::Atom, "name", Encoding::Text),
	field("email", Namespace::Atom, "email", Encoding::Text),
	field("uri", Namespace::Atom, "uri", Encoding::Uri),
];

pub const PORTABLE_CONTACTS : &[Field] = &[
	field("uid", Namespace::PortableContacts, "id", Encoding::Text),
	field("display_name", Namespace::PortableContacts, "displayName", Encoding::Text),
	field("preferred_username", Namespace::PortableContacts, "preferredUsername", Encoding::Text),
	field("nickname", Namespace::PortableContacts, "nickname", Encoding::Text),
	field("gender", Namespace::PortableContacts, "gender", Encoding::Text),
	field("note", Namespace::PortableContacts, "note", Encoding::Text),
	field("birthday", Namespace::PortableContacts, "birthday", Encoding::Date),
	field("anniversary", Namespace::PortableContacts, "anniversary", Encoding::Date),
	field("published", Namespace::PortableContacts, "published", Encoding::Timestamp),
	field("updated", Namespace::PortableContacts, "updated", Encoding::Timestamp),
	field("extended_name", Namespace::PortableContacts, "name", Encoding::Record),
	field("organization", Namespace::PortableContacts, "organization", Encoding::Record),
	field("address", Namespace::PortableContacts, "address", Encoding::Record),
	field("account", Namespace::PortableContacts, "account", Encoding::Record),
];

// children of the poco records are plain atom elements
pub const POCO_NAME : &[Field] = &[
	field("formatted", Namespace::Atom, "formatted", Encoding::Text),
	field("family_name", Namespace::Atom, "familyName", Encoding::Text),
	field("given_name", Namespace::Atom, "givenName", Encoding::Text),
	field("middle_name", Namespace::Atom, "middleName", Encoding::Text),
	field("honorific_prefix", Namespace::Atom, "honorificPrefix", Encoding::Text),
	field("honorific_suffix", Namespace::Atom, "honorificSuffix", Encoding::Text),
];

pub const POCO_ORGANIZATION : &[Field] = &[
	field("name", Namespace::Atom, "name", Encoding::Text),
	field("department", Namespace::Atom, "department", Encoding::Text),
	field("title", Namespace::Atom, "title", Encoding::Text),
	field("organization_type", Namespace::Atom, "type", Encoding::Text),
	field("start_date", Namespace::Atom, "startDate", Encoding::Date),
	field("end_date", Namespace::Atom, "endDate", Encoding::Date),
	field("location", Namespace::Atom, "location", Encoding::Text),
	field("description", Namespace::Atom, "description", Encoding::Text),
];

pub const POCO_ADDRESS : &[Field] = &[
	field("formatted", Namespace::Atom, "formatted", Encoding::Text),
	field("street_address", Namespace::Atom, "streetAddress", Encoding::Text),
	field("locality", Namespace::Atom, "locality", Encoding::Text),
	field("region", Namespace::Atom, "region", Encoding::Text),
	field("postal_code", Namespace::Atom, "postalCode", Encoding::Text),
	field("country", Namespace::Atom, "country", Encoding::Text),
];

pub const POCO_ACCOUNT : &[Field] = &[
	field("domain", Namespace::Atom, "domain", Encoding::Text),
	field("username", Namespace::Atom, "username", Encoding::Text),
	field("userid", Namespace::Atom, "userid", Encoding::Text),
];

pub const ACTIVITY_STREAMS : &[Field] = &[
	field("object_type", Namespace::ActivityStreams, "object-type", Encoding::Uri),
	field("verb", Namespace::ActivityStreams, "verb", Encoding::Uri),
	field("object", Namespace::ActivityStreams, "object", Encoding::Record),
	field("target", Namespace::ActivityStreams, "target", Encoding::Record),
	field("display_name", Namespace::ActivityStreams, "displayName", Encoding::Text),
	field("total_items", Namespace::ActivityStreams, "totalItems", Encoding::Number),
];

/// attributes of `thr:in-reply-to`, which are unqualified
pub const THREADING : &[Field] = &[
	field("reference", Namespace::Threading, "ref", Encoding::Text),
	field("href", Namespace::Threading, "href", Encoding::Uri),
	field("media_type", Namespace::Threading, "type", Encoding::Text),
	field("source", Namespace::Threading, "source", Encoding::Uri),
];

/// person keys kept in the document default namespace, outside of PortableContacts
pub const UNPREFIXED : &[&str] = &["pronoun"];

pub fn lookup(table: &'static [Field], key: &str) -> Option<&'static Field> {
	table.iter().find(|f| f.key == key)
}

/// wire name of `key`, the key itself when the table doesn't rename it
pub fn wire(table: &'static [Field], key: &'static str) -> &'static str {
	lookup(table, key).map(|f| f.name).unwrap_or(key)
}

pub fn reverse(table: &'static [Field], namespace: Namespace, name: &str) -> Option<&'static Field> {
	table.iter().find(|f| f.namespace == namespace && f.name == name)
}

const PERSON_CORE : [&str; 3] = ["name", "email", "uri"];

/// where a person field is published: atom core first, then the explicit PortableContacts
/// table, then the unprefixed set. anything else lands in PortableContacts under its own key
pub fn person_element(key: &str) -> (Namespace, String) {
	if PERSON_CORE.contains(&key) {
		if let Some(f) = lookup(ATOM, key) {
			return (f.namespace, f.name.to_string());
		}
	}
	if let Some(f) = lookup(PORTABLE_CONTACTS, key) {
		return (f.namespace, f.name.to_string());
	}
	if UNPREFIXED.contains(&key) {
		return (Namespace::Atom, key.to_string());
	}
	tracing::debug!("no registered element for person field '{key}', defaulting to poco:{key}");
	(Namespace::PortableContacts, key.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonKey {
	Known(&'static str),
	/// custom PortableContacts field, published under this name
	Extension(String),
}

/// inverse of [person_element]. None for elements which are not person fields at all
pub fn person_key(namespace: Namespace, name: &str) -> Option<PersonKey> {
	match namespace {
		Namespace::Atom => {
			if let Some(key) = PERSON_CORE.iter().find(|k| **k == name) {
				return Some(PersonKey::Known(*key));
			}
			UNPREFIXED.iter()
				.find(|k| **k == name)
				.map(|k| PersonKey::Known(*k))
		},
		Namespace::PortableContacts => Some(
			reverse(PORTABLE_CONTACTS, namespace, name)
				.map(|f| PersonKey::Known(f.key))
				.unwrap_or_else(|| PersonKey::Extension(name.to_string()))
		),
		_ => None,
	}
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
	value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
	DateTime::parse_from_rfc3339(value.trim())
		.map(|x| x.with_timezone(&Utc))
		.map_err(|source| MapperError::Timestamp { field, value: value.to_string(), source })
}

pub fn format_date(value: &NaiveDate) -> String {
	value.format("%Y-%m-%d").to_string()
}

/// also accepts a full timestamp, keeping only its day
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
	let value = value.trim();
	match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
		Ok(date) => Ok(date),
		Err(source) => DateTime::parse_from_rfc3339(value)
			.map(|x| x.date_naive())
			.map_err(|_| MapperError::Date { field, value: value.to_string(), source }),
	}
}

pub fn parse_number(field: &'static str, value: &str) -> Result<u64> {
	value.trim()
		.parse()
		.map_err(|source| MapperError::Number { field, value: value.to_string(), source })
}
