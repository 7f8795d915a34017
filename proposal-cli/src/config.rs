use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use proposal_sdk::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_ENDPOINT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when no `--config` is given
pub const LOCAL_CONFIG_FILE: &str = "carbon-proposal.toml";

/// Prefix of environment overrides, e.g. `CARBON_PROPOSAL_SERVER__BASE_URL`
pub const ENV_PREFIX: &str = "CARBON_PROPOSAL";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, config files and the environment.
    ///
    /// An explicit path replaces the user and working-directory config files
    /// and must exist. The working-directory file wins over the user file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(explicit, None)
    }

    /// Like [`load`](Self::load), reading overrides from `env` instead of the
    /// process environment when it is given
    pub fn load_with_env(
        explicit: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let settings = ConfigBuilder::builder()
            .set_default("server.base_url", DEFAULT_BASE_URL)?
            .set_default("server.endpoint", DEFAULT_ENDPOINT)?
            .set_default("output.dir", ".")?
            .set_default("logging.level", "info")?;

        let settings = config_files(explicit)
            .into_iter()
            .fold(settings, |settings, (path, required)| {
                settings.add_source(File::from(path).required(required))
            });

        let settings = settings.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        settings.build()?.try_deserialize()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.server.base_url.clone(),
            endpoint: self.server.endpoint.clone(),
            timeout: self.server.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Config files in increasing precedence, with whether each must exist
fn config_files(explicit: Option<&Path>) -> Vec<(PathBuf, bool)> {
    match explicit {
        Some(path) => vec![(path.to_path_buf(), true)],
        None => user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)))
            .map(|path| (path, false))
            .collect(),
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carbon-proposal").join("config.toml"))
}
