#[derive(Debug, thiserror::Error)]
pub enum MapperError {
	#[error("malformed xml: {0}")]
	Xml(#[from] quick_xml::Error),

	#[error("malformed xml attribute: {0}")]
	Attribute(#[from] quick_xml::events::attributes::AttrError),

	#[error("failed writing xml: {0}")]
	Io(#[from] std::io::Error),

	#[error("document is not valid utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	#[error("serialized document is not valid utf-8: {0}")]
	FromUtf8(#[from] std::string::FromUtf8Error),

	#[error("document has no root element")]
	EmptyDocument,

	#[error("document ended inside <{0}>")]
	Truncated(String),

	/// a mapper was handed a node it doesn't know how to read: this is a caller bug
	#[error("invalid argument: expected <{expected}> element, got <{found}>")]
	UnexpectedElement {
		expected: &'static str,
		found: String,
	},

	#[error("invalid timestamp '{value}' in <{field}>: {source}")]
	Timestamp {
		field: &'static str,
		value: String,
		source: chrono::ParseError,
	},

	#[error("invalid date '{value}' in <{field}>: {source}")]
	Date {
		field: &'static str,
		value: String,
		source: chrono::ParseError,
	},

	#[error("invalid number '{value}' in <{field}>: {source}")]
	Number {
		field: &'static str,
		value: String,
		source: std::num::ParseIntError,
	},
}

impl MapperError {
	pub fn unexpected(expected: &'static str, found: &crate::xml::Element) -> Self {
		MapperError::UnexpectedElement {
			expected,
			found: found.name.clone(),
		}
	}
}

pub type Result<T> = std::result::Result<T, MapperError>;
