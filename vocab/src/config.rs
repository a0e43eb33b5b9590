#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub decode: DecodeConfig,

	#[serde(default)]
	pub encode: EncodeConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DecodeConfig {
	/// embedded objects nested deeper than this make the whole document fail
	#[serde_inline_default(64)]
	pub max_depth: usize,

	/// fail on functional properties whose value matches none of their shapes, instead of
	/// keeping it as an unknown value
	#[serde_inline_default(false)]
	pub strict_functional: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct EncodeConfig {
	/// write single values of non functional properties without wrapping array
	#[serde_inline_default(true)]
	pub collapse_singletons: bool,
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
	fn defaults_are_filled_for_missing_sections() {
		let cfg : Config = toml::from_str("[decode]\nmax_depth = 8\n").expect("could not parse config");
		assert_eq!(cfg.decode.max_depth, 8);
		assert!(!cfg.decode.strict_functional);
		assert!(cfg.encode.collapse_singletons);
	}

	#[test]
	fn empty_config_equals_default() {
		let cfg : Config = toml::from_str("").expect("could not parse empty config");
		let default = Config::default();
		assert_eq!(cfg.decode.max_depth, default.decode.max_depth);
		assert_eq!(default.decode.max_depth, 64);
	}

	#[test]
	fn missing_file_falls_back_to_default() {
		let cfg = Config::load(Some(&std::path::PathBuf::from("/nonexistent/apvocab.toml")));
		assert_eq!(cfg.decode.max_depth, 64);
	}
}
