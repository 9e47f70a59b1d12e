use std::io::Write;

use nenuphar::ext::LoggableError;

pub fn normalize(
	config: &nenuphar::Config,
	path: &std::path::Path,
	output: Option<&std::path::Path>,
	entry: bool,
) -> nenuphar::Result<()> {
	let document = std::fs::read_to_string(path)?;

	let normalized = if entry {
		let activity = nenuphar::entry_from_str(&document)?;
		nenuphar::entry_to_string(&activity, &config.writer)?
	} else {
		let feed = nenuphar::feed_from_str(&document)?;
		tracing::info!("read feed with {} items", feed.items.len());
		nenuphar::feed_to_string(&feed, &config.writer)?
	};

	match output {
		Some(out) => {
			std::fs::write(out, normalized)?;
			tracing::info!("normalized document written to {}", out.display());
		},
		None => {
			let mut stdout = std::io::stdout().lock();
			writeln!(stdout, "{normalized}")?;
			stdout.flush().warn_failed("failed flushing stdout");
		},
	}

	Ok(())
}
