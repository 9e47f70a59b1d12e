#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub writer: WriterConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct WriterConfig {
	#[serde_inline_default(true)]
	/// break serialized documents into indented lines
	pub pretty: bool,

	#[serde_inline_default(2)]
	/// spaces per nesting level, only used when pretty printing
	pub indent_size: usize,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::Config;

	#[test]
	fn missing_sections_take_defaults() {
		let cfg : Config = toml::from_str("").expect("empty config is valid");
		assert!(cfg.writer.pretty);
		assert_eq!(cfg.writer.indent_size, 2);
	}

	#[test]
	fn partial_sections_keep_other_defaults() {
		let cfg : Config = toml::from_str("[writer]\npretty = false\n").expect("valid config");
		assert!(!cfg.writer.pretty);
		assert_eq!(cfg.writer.indent_size, 2);
	}

	#[test]
	fn unreadable_path_falls_back_to_defaults() {
		let cfg = Config::load(Some(&std::path::PathBuf::from("/definitely/not/here.toml")));
		assert!(cfg.writer.pretty);
	}
}
