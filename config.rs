#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub output: OutputConfig,

	#[serde(default)]
	pub parse: ParseConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent printed json
	pub pretty: bool,

	#[serde(default)]
	/// add an activitystreams @context to printed documents
	pub with_context: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ParseConfig {
	#[serde(default)]
	/// refuse documents whose root type is not part of the vocabulary, instead of reading them as Object
	pub strict_root: bool,
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
		let cfg: Config = toml::from_str("[parse]\nstrict_root = true\n").unwrap();
		assert!(cfg.parse.strict_root);
		assert!(cfg.output.pretty);
		assert!(!cfg.output.with_context);
	}

	#[test]
	fn no_path_means_default_config() {
		let cfg = Config::load(None);
		assert!(cfg.output.pretty);
		assert!(!cfg.parse.strict_root);
	}
}
