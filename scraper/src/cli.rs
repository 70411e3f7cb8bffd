use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigSource, DEFAULT_TARGETS_FILE};
use crate::extractor::ExtractMode;

/// Posts fresh entry-level IT support jobs from Indeed to Discord.
#[derive(Debug, Parser)]
#[command(name = "helpdesk-scraper", version)]
pub struct Cli {
    /// YAML list of country targets
    #[arg(short, long, default_value = DEFAULT_TARGETS_FILE)]
    pub config: PathBuf,

    /// Text file holding a single webhook URL; searches the default host
    #[arg(short, long, conflicts_with = "config")]
    pub webhook_file: Option<PathBuf>,

    /// Skip malformed job cards instead of failing the run
    #[arg(long)]
    pub skip_malformed: bool,
}

impl Cli {
    pub fn config_source(&self) -> ConfigSource {
        match &self.webhook_file {
            Some(path) => ConfigSource::Webhook(path.clone()),
            None => ConfigSource::Targets(self.config.clone()),
        }
    }

    pub fn extract_mode(&self) -> ExtractMode {
        if self.skip_malformed {
            ExtractMode::Lenient
        } else {
            ExtractMode::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["helpdesk-scraper"]).unwrap();
        assert_eq!(cli.config_source(), ConfigSource::Targets(PathBuf::from("countries.yml")));
        assert_eq!(cli.extract_mode(), ExtractMode::Strict);
    }

    #[test]
    fn test_webhook_file_variant() {
        let cli = Cli::try_parse_from([
            "helpdesk-scraper",
            "--webhook-file",
            "hook.txt",
            "--skip-malformed",
        ])
        .unwrap();
        assert_eq!(cli.config_source(), ConfigSource::Webhook(PathBuf::from("hook.txt")));
        assert_eq!(cli.extract_mode(), ExtractMode::Lenient);
    }

    #[test]
    fn test_config_and_webhook_file_conflict() {
        let result = Cli::try_parse_from([
            "helpdesk-scraper",
            "--config",
            "a.yml",
            "--webhook-file",
            "hook.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
