pub fn links(path: &std::path::Path) -> nenuphar::Result<()> {
	let document = std::fs::read_to_string(path)?;
	let feed = nenuphar::feed_from_str(&document)?;

	println!("url: {}", feed.base.url.as_deref().unwrap_or("-"));
	println!("salmon: {}", feed.salmon_url.as_deref().unwrap_or("-"));
	if feed.hubs.is_empty() {
		println!("hubs: -");
	}
	for hub in &feed.hubs {
		println!("hub: {hub}");
	}

	Ok(())
}
