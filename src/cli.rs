//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::IntentId;
use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "prompt-refiner", version, about = "Refine prompts for a declared intent")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/prompt-refiner/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the refinement service base URL
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Refine a base prompt for an intent
    Generate {
        /// Intent identifier (see `intents`)
        #[arg(short, long)]
        intent: Option<IntentId>,

        /// Copy the refined prompt to the clipboard
        #[arg(long)]
        copy: bool,

        /// The base prompt
        prompt: String,
    },

    /// List the available intents
    Intents,

    /// Check that the refinement service is reachable
    Health,

    /// Run the bundled reference refinement service
    Serve {
        /// Bind address (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(url) = &self.service_url {
            config.service.base_url = url.clone();
        }
        if let Command::Serve {
            bind: Some(bind), ..
        } = &self.command
        {
            config.server.bind_addr = bind.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_intent() {
        let cli = Cli::try_parse_from([
            "prompt-refiner",
            "generate",
            "--intent",
            "image_generation",
            "--copy",
            "a cat",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                intent,
                copy,
                prompt,
            } => {
                assert_eq!(intent, Some(IntentId::ImageGeneration));
                assert!(copy);
                assert_eq!(prompt, "a cat");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_intent() {
        let result = Cli::try_parse_from(["prompt-refiner", "generate", "-i", "poetry", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_apply_to_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "prompt-refiner",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--service-url",
            "http://127.0.0.1:9999",
            "serve",
            "--bind",
            "127.0.0.1:7000",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.service.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.server.bind_addr, "127.0.0.1:7000");
    }

    #[test]
    fn invalid_override_fails_validation() {
        let dir = tempfile::TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "prompt-refiner",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--service-url",
            "localhost:5000",
            "health",
        ])
        .unwrap();

        assert!(matches!(
            cli.load_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
