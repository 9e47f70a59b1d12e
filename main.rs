use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use nenuphar_cli as cli;

#[derive(Parser)]
/// OStatus atom documents, in and out of canonical activities
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	#[cfg(feature = "cli")]
	#[clap(flatten)]
	Cli(cli::CliCommand),
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.with_writer(std::io::stderr)
		.init();

	let config = nenuphar::Config::load(args.config.as_ref());

	match args.command {
		Mode::Config => match toml::to_string_pretty(&config) {
			Ok(x) => println!("{x}"),
			Err(e) => tracing::error!("failed serializing config: {e}"),
		},

		#[cfg(feature = "cli")]
		Mode::Cli(command) => {
			if let Err(e) = cli::run(config, command) {
				tracing::error!("failed running cli task: {e}");
				std::process::exit(1);
			}
		},
	}
}
