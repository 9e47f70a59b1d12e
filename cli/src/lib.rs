mod inspect;
pub use inspect::*;

mod normalize;
pub use normalize::*;

mod links;
pub use links::*;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// parse a document and print its canonical form as json
	Inspect {
		/// path to atom document
		path: std::path::PathBuf,

		#[arg(long, default_value_t = false)]
		/// document is a standalone entry rather than a feed
		entry: bool,
	},

	/// parse a document and write it back through the canonical model
	Normalize {
		/// path to atom document
		path: std::path::PathBuf,

		#[arg(short, long)]
		/// write here instead of stdout
		output: Option<std::path::PathBuf>,

		#[arg(long, default_value_t = false)]
		/// document is a standalone entry rather than a feed
		entry: bool,
	},

	/// show where a feed lives and which endpoints it declares
	Links {
		/// path to atom feed
		path: std::path::PathBuf,
	},
}

pub fn run(config: nenuphar::Config, command: CliCommand) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!("running cli task: {command:?}");
	match command {
		CliCommand::Inspect { path, entry } =>
			Ok(inspect(&path, entry)?),
		CliCommand::Normalize { path, output, entry } =>
			Ok(normalize(&config, &path, output.as_deref(), entry)?),
		CliCommand::Links { path } =>
			Ok(links(&path)?),
	}
}
