//! Validated configuration after merging CLI, environment and dotenv sources.

use std::fmt;
use std::path::Path;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};

/// Fully validated configuration ready for use by the application.
///
/// Built once at startup and passed by reference afterwards.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Webhook URL (`.../webhooks/{id}/{token}`)
    pub webhook_url: Url,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ webhook_url: {}, verbose: {} }}",
            redact(&self.webhook_url),
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and the
    /// environment value, if any.
    ///
    /// The CLI value takes precedence; blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No webhook URL is given
    /// - The URL does not parse or is not http(s)
    pub fn from_raw(cli: &Cli, env_value: Option<&str>) -> Result<Self, ConfigError> {
        let url_str = cli
            .webhook_url
            .as_deref()
            .or(env_value)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_URL,
                    "Set DISCORD_WEBHOOK_URL (environment or .env file) or pass --webhook-url",
                )
            })?;

        Ok(Self {
            webhook_url: parse_webhook_url(url_str)?,
            verbose: cli.verbose,
        })
    }

    /// Loads configuration from CLI, process environment and dotenv file.
    ///
    /// An explicit `--env-file` must exist; the default `./.env` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the dotenv file cannot be read or the merged
    /// configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.webhook_url.is_some() {
            return Self::from_raw(cli, None);
        }

        let from_process = std::env::var(defaults::WEBHOOK_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());

        let env_value = match from_process {
            Some(value) => Some(value),
            None => match &cli.env_file {
                Some(path) => read_env_file(path, defaults::WEBHOOK_URL_ENV)?,
                None => read_optional_env_file(Path::new(defaults::ENV_FILE))?,
            },
        };

        Self::from_raw(cli, env_value.as_deref())
    }
}

/// Looks up `key` in a dotenv file without touching the process environment.
pub(crate) fn read_env_file(path: &Path, key: &str) -> Result<Option<String>, ConfigError> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let mut value = None;
    for item in dotenvy::from_path_iter(path).map_err(to_error)? {
        let (name, v) = item.map_err(to_error)?;
        if name == key {
            value = Some(v);
        }
    }
    Ok(value)
}

fn read_optional_env_file(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    tracing::debug!("Reading {}", path.display());
    read_env_file(path, defaults::WEBHOOK_URL_ENV)
}

fn parse_webhook_url(url_str: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// Renders the URL with its last path segment (the token) masked.
fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    redacted.set_query(None);

    let segments: Vec<String> = url
        .path_segments()
        .map(|s| s.filter(|s| !s.is_empty()).map(str::to_string).collect())
        .unwrap_or_default();

    if let Some((_, head)) = segments.split_last() {
        let path = head
            .iter()
            .map(String::as_str)
            .chain(std::iter::once("***"))
            .collect::<Vec<_>>()
            .join("/");
        redacted.set_path(&path);
    }
    redacted.to_string()
}
