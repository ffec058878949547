//! Tests for CLI argument parsing.

use std::path::Path;

use super::cli::Cli;

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["discord-webhook-mcp"]);

        assert!(cli.webhook_url.is_none());
        assert!(cli.env_file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::parse_from_iter([
            "discord-webhook-mcp",
            "--webhook-url",
            "https://discord.com/api/webhooks/1/t",
            "--env-file",
            "/etc/discord.env",
            "-v",
        ]);

        assert_eq!(
            cli.webhook_url.as_deref(),
            Some("https://discord.com/api/webhooks/1/t")
        );
        assert_eq!(cli.env_file.as_deref(), Some(Path::new("/etc/discord.env")));
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["discord-webhook-mcp", "--url", "x"]);

        assert!(result.is_err());
    }
}
