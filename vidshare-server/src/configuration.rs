use serde::Deserialize;
use std::fs::read_to_string;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Loaded from `configuration.toml` unless `--config-file` says otherwise.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Configuration {
	/// Where the REST API listens, e.g. `127.0.0.1:8000`.
	pub address: SocketAddr,
	/// Directives in `tracing_subscriber::EnvFilter` syntax, e.g. `info,vidshare_server=debug`.
	pub log_filters: String,
	/// Origins the player may call the API from, e.g. `https://vidshare.example`. Any origin when empty.
	#[serde(default)]
	pub allowed_origins: Vec<String>,
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let path = path.as_ref();
		let text = read_to_string(path).map_err(|source| ConfigurationError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		Configuration::try_from(text.as_str()).map_err(|source| ConfigurationError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Couldn't read '{}': {source}", path.display())]
	Read { path: PathBuf, source: std::io::Error },
	#[error("Invalid configuration in '{}': {source}", path.display())]
	Parse { path: PathBuf, source: toml::de::Error },
}
