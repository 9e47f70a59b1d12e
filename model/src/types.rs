use crate::strenum;

strenum! {
	pub enum ObjectType {
		Activity => "activity",
		Application => "application",
		Article => "article",
		Audio => "audio",
		Badge => "badge",
		Bookmark => "bookmark",
		Collection => "collection",
		Comment => "comment",
		Event => "event",
		Feed => "feed",
		File => "file",
		Group => "group",
		Image => "image",
		Note => "note",
		Organization => "organization",
		Person => "person",
		Photo => "photo",
		Place => "place",
		Product => "product",
		Question => "question",
		Review => "review",
		Service => "service",
		Video => "video";
		Other
	}
}

strenum! {
	pub enum Verb {
		Favorite => "favorite",
		Follow => "follow",
		Like => "like",
		MakeFriend => "make-friend",
		Join => "join",
		Play => "play",
		Post => "post",
		Save => "save",
		Share => "share",
		Tag => "tag",
		Update => "update";
		Other
	}
}

strenum! {
	/// how the text of a title, subtitle, summary or content block should be interpreted
	pub enum ContentType {
		Text => "text",
		Html => "html",
		Xhtml => "xhtml",
	}
}

impl Default for ContentType {
	fn default() -> Self {
		ContentType::Text
	}
}

#[cfg(test)]
mod test {
	use super::{ContentType, ObjectType, Verb};

	#[test]
	fn known_verbs_parse_into_their_variant() {
		assert_eq!(Verb::from("make-friend"), Verb::MakeFriend);
		assert_eq!(Verb::from("post"), Verb::Post);
	}

	#[test]
	fn unknown_verbs_pass_through_verbatim() {
		let verb = Verb::from("http://example.com/verbs/poke");
		assert_eq!(verb, Verb::Other("http://example.com/verbs/poke".to_string()));
		assert_eq!(verb.as_ref(), "http://example.com/verbs/poke");
	}

	#[test]
	fn object_types_serialize_lowercase() {
		assert_eq!(ObjectType::Note.as_ref(), "note");
		assert_eq!(ObjectType::from("bookmark"), ObjectType::Bookmark);
		assert_eq!(ObjectType::from("tortoise").to_string(), "tortoise");
	}

	#[test]
	fn content_types_are_closed() {
		assert_eq!(ContentType::try_from("xhtml").expect("xhtml is a content type"), ContentType::Xhtml);
		assert!(ContentType::try_from("text/plain").is_err());
		assert_eq!(ContentType::default(), ContentType::Text);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn enums_serialize_as_plain_strings() {
		assert_eq!(serde_json::to_string(&Verb::MakeFriend).expect("serializable"), "\"make-friend\"");
		let parsed : ObjectType = serde_json::from_str("\"tortoise\"").expect("open enums accept anything");
		assert_eq!(parsed, ObjectType::Other("tortoise".to_string()));
		assert!(serde_json::from_str::<ContentType>("\"markdown\"").is_err());
	}
}
