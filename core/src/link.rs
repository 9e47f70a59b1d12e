use crate::registry::{namespace_of, Namespace};
use crate::xml::Element;

/// one `atom:link`, relation included
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
	pub rel: Option<String>,
	pub href: Option<String>,
	pub media_type: Option<String>,
	pub hreflang: Option<String>,
	pub title: Option<String>,
	pub length: Option<u64>,
}

impl Link {
	pub fn new(rel: &str, href: &str) -> Self {
		Link {
			rel: Some(rel.to_string()),
			href: Some(href.to_string()),
			..Default::default()
		}
	}

	pub fn to_element(&self) -> Element {
		let mut element = Namespace::Atom.element("link");
		let attributes = [
			("rel", self.rel.clone()),
			("href", self.href.clone()),
			("type", self.media_type.clone()),
			("hreflang", self.hreflang.clone()),
			("title", self.title.clone()),
			("length", self.length.map(|x| x.to_string())),
		];
		for (key, value) in attributes {
			if let Some(value) = value.filter(|x| !x.is_empty()) {
				element.set_attribute(key, &value);
			}
		}
		element
	}

	pub fn from_element(element: &Element) -> Self {
		let attribute = |key: &str| element.attribute(key).filter(|x| !x.is_empty()).map(str::to_string);
		Link {
			rel: attribute("rel"),
			href: attribute("href"),
			media_type: attribute("type"),
			hreflang: attribute("hreflang"),
			title: attribute("title"),
			length: match element.attribute("length").map(str::parse::<u64>) {
				Some(Ok(x)) => Some(x),
				Some(Err(e)) => {
					tracing::warn!("ignoring invalid link length: {e}");
					None
				},
				None => None,
			},
		}
	}

	pub fn is(&self, rel: &str) -> bool {
		self.rel.as_deref() == Some(rel)
	}
}

/// all `atom:link` children of an element, in document order
pub fn links_of(element: &Element) -> Vec<Link> {
	element.elements()
		.filter(|x| x.name == "link" && namespace_of(x) == Some(Namespace::Atom))
		.map(Link::from_element)
		.collect()
}

/// exact, case sensitive match on rel. keeps document order
pub fn links_with_rel<'a>(links: &'a [Link], rel: &str) -> Vec<&'a Link> {
	links.iter().filter(|l| l.is(rel)).collect()
}

/// the url an element calls home: first alternate link, else first self link, else whatever
/// the first link with an href points to. an alternate or self link without href still wins
pub fn resolve_self_url(links: &[Link]) -> Option<String> {
	if let Some(alternate) = links.iter().find(|l| l.is("alternate")) {
		return alternate.href.clone();
	}
	if let Some(this) = links.iter().find(|l| l.is("self")) {
		return this.href.clone();
	}
	let fallback = links.iter().find_map(|l| l.href.clone());
	if let Some(ref href) = fallback {
		tracing::debug!("no alternate nor self link, using {href} as url");
	}
	fallback
}

#[cfg(test)]
mod test {
	use super::{links_of, links_with_rel, resolve_self_url, Link};
	use crate::xml::parse;

	#[test]
	fn alternate_wins_over_self() {
		let links = vec![
			Link::new("self", "S"),
			Link::new("hub", "H1"),
			Link::new("alternate", "A"),
		];
		assert_eq!(resolve_self_url(&links).as_deref(), Some("A"));
	}

	#[test]
	fn self_wins_over_anything_else() {
		let links = vec![Link::new("hub", "H1"), Link::new("self", "S")];
		assert_eq!(resolve_self_url(&links).as_deref(), Some("S"));
	}

	#[test]
	fn falls_back_to_first_link_with_href() {
		let links = vec![
			Link { rel: Some("hub".into()), ..Default::default() },
			Link::new("hub", "H1"),
			Link::new("salmon", "X"),
		];
		assert_eq!(resolve_self_url(&links).as_deref(), Some("H1"));
		assert_eq!(resolve_self_url(&[]), None);
	}

	#[test]
	fn first_alternate_is_taken_even_without_href() {
		let links = vec![
			Link { rel: Some("alternate".into()), ..Default::default() },
			Link::new("alternate", "A"),
			Link::new("self", "S"),
		];
		assert_eq!(resolve_self_url(&links), None);
		let links = vec![Link { rel: Some("self".into()), ..Default::default() }, Link::new("hub", "H1")];
		assert_eq!(resolve_self_url(&links), None);
	}

	#[test]
	fn missing_rel_is_not_alternate() {
		let links = vec![
			Link { href: Some("plain".into()), ..Default::default() },
			Link::new("self", "S"),
		];
		assert_eq!(resolve_self_url(&links).as_deref(), Some("S"));
	}

	#[test]
	fn rel_matching_is_exact() {
		let links = vec![Link::new("hub", "H1"), Link::new("HUB", "H2"), Link::new("hub", "H3")];
		let hubs : Vec<_> = links_with_rel(&links, "hub").into_iter().filter_map(|l| l.href.as_deref()).collect();
		assert_eq!(hubs, vec!["H1", "H3"]);
		assert!(links_with_rel(&links, "salmon").is_empty());
	}

	#[test]
	fn links_are_read_with_their_attributes() {
		let root = parse(r#"<entry xmlns="http://www.w3.org/2005/Atom">
			<link rel="enclosure" href="http://e.com/v.ogv" type="video/ogg" length="1337"/>
			<link rel="self" href="http://e.com/1"/>
		</entry>"#).expect("valid document");
		let links = links_of(&root);
		assert_eq!(links.len(), 2);
		assert_eq!(links[0].media_type.as_deref(), Some("video/ogg"));
		assert_eq!(links[0].length, Some(1337));
		assert_eq!(Link::from_element(&links[1].to_element()), links[1]);
	}
}
