use serde::{Deserialize, Serialize};
use std::fs;

/// Longest pause the adapter will accept, in milliseconds.
pub const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    /// Pause before the computer card is turned
    pub reveal_delay_ms: u64,
    /// Pause while a guess result is on screen
    pub result_delay_ms: u64,
    pub log_path: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub reveal_delay_ms: ValueSource,
    pub result_delay_ms: ValueSource,
    pub log_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            reveal_delay_ms: ValueSource::Default,
            result_delay_ms: ValueSource::Default,
            log_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_delay_ms: 1_000,
            result_delay_ms: 2_000,
            log_path: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Like [`load`], but leaves range checks to the caller so command-line
/// flags can replace out-of-range values first. Call [`validate`] on the
/// merged result.
pub fn load_unchecked() -> Result<Config, ConfigError> {
    resolve_unchecked(|key| std::env::var(key).ok()).map(|resolved| resolved.config)
}

/// Resolves configuration from defaults, the `HIGHLOW_CONFIG` file and
/// `HIGHLOW_*` environment variables, in increasing precedence.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

fn resolve(env: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let resolved = resolve_unchecked(env)?;
    validate(&resolved.config)?;
    Ok(resolved)
}

fn resolve_unchecked(
    env: impl Fn(&str) -> Option<String>,
) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env("HIGHLOW_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.reveal_delay_ms {
            cfg.reveal_delay_ms = v;
            sources.reveal_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.result_delay_ms {
            cfg.result_delay_ms = v;
            sources.result_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.log_path {
            cfg.log_path = Some(v);
            sources.log_path = ValueSource::File;
        }
    }

    if let Some(seed) = env("HIGHLOW_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(ms) = env("HIGHLOW_REVEAL_DELAY_MS")
        && !ms.is_empty()
    {
        cfg.reveal_delay_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid reveal_delay_ms".into()))?;
        sources.reveal_delay_ms = ValueSource::Env;
    }
    if let Some(ms) = env("HIGHLOW_RESULT_DELAY_MS")
        && !ms.is_empty()
    {
        cfg.result_delay_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid result_delay_ms".into()))?;
        sources.result_delay_ms = ValueSource::Env;
    }
    if let Some(path) = env("HIGHLOW_LOG")
        && !path.is_empty()
    {
        cfg.log_path = Some(path);
        sources.log_path = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    reveal_delay_ms: Option<u64>,
    #[serde(default)]
    result_delay_ms: Option<u64>,
    #[serde(default)]
    log_path: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.reveal_delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "reveal_delay_ms must be <= {}",
            MAX_DELAY_MS
        )));
    }
    if cfg.result_delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "result_delay_ms must be <= {}",
            MAX_DELAY_MS
        )));
    }
    Ok(())
}
