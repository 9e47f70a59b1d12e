pub mod config;
pub mod error;
pub mod ext;
pub mod xml;
pub mod registry;
pub mod content;
pub mod link;
pub mod thread;
pub mod person;
pub mod object;
pub mod entry;
pub mod feed;

pub use config::{Config, WriterConfig};
pub use error::MapperError as Error;
pub use error::Result;
pub use link::Link;

pub use nenuphar_model as model;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use nenuphar_model::{Activity, Feed};

pub fn feed_from_str(document: &str) -> Result<Feed> {
	feed::to_canonical(&xml::parse(document)?)
}

pub fn feed_to_string(feed: &Feed, config: &WriterConfig) -> Result<String> {
	xml::write(&feed::from_canonical(feed), &registry::PREFIXES, config)
}

/// standalone entry documents, as delivered through salmon or pushed by hubs
pub fn entry_from_str(document: &str) -> Result<Activity> {
	entry::to_canonical(&xml::parse(document)?)
}

pub fn entry_to_string(activity: &Activity, config: &WriterConfig) -> Result<String> {
	xml::write(&entry::from_canonical(activity), &registry::PREFIXES, config)
}
