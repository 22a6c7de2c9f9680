//! Process-wide context: configuration, config service and GitHub
//! client, constructed once in `main` and passed by reference.

use anyhow::{Context, Result};
use orc_core::{Config, ConfigService};
use orc_github::GithubClient;

use crate::prompt;

pub struct App {
    pub config: Config,
    pub service: ConfigService,
    pub github: GithubClient,
}

impl App {
    /// Load the configuration, creating it interactively on first run.
    pub fn bootstrap(service: ConfigService) -> Result<Self> {
        let config = if service.check_config_file() {
            service
                .read()
                .context("failed to load the configuration")?
        } else {
            let org = prompt::line("Enter the organization name: ")?;
            let key = prompt::secret("Enter the GitHub API key: ")?;

            let path = service
                .create(&key, &org)
                .context("failed to create the config file")?;
            println!("Config file created at {}", path.display());

            Config::new(key, org)
        };

        let github = GithubClient::new(config.api_key.clone());

        Ok(Self {
            config,
            service,
            github,
        })
    }
}
