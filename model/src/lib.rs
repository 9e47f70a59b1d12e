mod macros;
pub(crate) use macros::{strenum, setter};
pub use macros::TypeValueError;

mod types;
pub use types::{ContentType, ObjectType, Verb};

mod base;
pub(crate) use base::activity_object;
pub use base::{ActivityObject, ActivityObjectMut, Base, Source};

mod person;
pub use person::{Account, Address, ExtendedName, Organization, Person};

mod media;
pub use media::{Generic, MediaLink, Note, Video};

mod object;
pub use object::Object;

mod activity;
pub use activity::Activity;

mod feed;
pub use feed::{Category, Feed, Generator};

mod thread;
pub use thread::ThreadReference;
