//! Default values for configuration options.

/// Environment variable holding the full webhook URL.
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Dotenv file looked up in the working directory when `--env-file` is absent.
pub const ENV_FILE: &str = ".env";
