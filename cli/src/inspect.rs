#[derive(Debug, thiserror::Error)]
pub enum InspectError {
	#[error("could not read document: {0}")]
	Mapper(#[from] nenuphar::Error),

	#[error("could not serialize canonical form: {0}")]
	Json(#[from] serde_json::Error),
}

pub fn inspect(path: &std::path::Path, entry: bool) -> Result<(), InspectError> {
	let document = std::fs::read_to_string(path).map_err(nenuphar::Error::from)?;

	let json = if entry {
		serde_json::to_string_pretty(&nenuphar::entry_from_str(&document)?)?
	} else {
		serde_json::to_string_pretty(&nenuphar::feed_from_str(&document)?)?
	};

	println!("{json}");
	Ok(())
}
