//! GitHub REST client

use crate::types::{Repository, RepositoryList};
use crate::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header;

const API_ROOT: &str = "https://api.github.com";

/// Repositories fetched per page. The tool reads a single page.
const PER_PAGE: u32 = 150;

pub struct GithubClient {
    http: Client,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
        }
    }

    /// List the repositories of an organization.
    pub fn repositories(&self, org: &str) -> Result<RepositoryList> {
        let url = format!("{}/orgs/{}/repos", API_ROOT, org);

        tracing::debug!(%org, "fetching organization repositories");

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", PER_PAGE)])
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(
                header::USER_AGENT,
                concat!("orc/", env!("CARGO_PKG_VERSION")),
            )
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!(
                "listing repositories of {} failed with status {}",
                org, status
            )));
        }

        let repositories: Vec<Repository> = response.json()?;

        tracing::debug!(%org, count = repositories.len(), "repositories fetched");

        Ok(RepositoryList { repositories })
    }
}
