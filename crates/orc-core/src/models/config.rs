//! Configuration domain model

use serde::{Deserialize, Serialize};

/// The persisted configuration: API credential, default organization
/// and the list of known organizations.
///
/// The wire format is fixed: three top-level JSON fields named `key`,
/// `org` and `orgs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// GitHub API key.
    #[serde(rename = "key")]
    pub api_key: String,

    /// Organization consulted when no explicit selection is made.
    #[serde(rename = "org")]
    pub default_organization: String,

    /// Known organizations. Insertion-ordered, no duplicates; the
    /// order only matters for display.
    #[serde(rename = "orgs")]
    pub organizations: Vec<String>,
}

impl Config {
    /// First-run configuration: a single organization, which becomes
    /// the default.
    pub fn new(api_key: impl Into<String>, org: impl Into<String>) -> Self {
        let org = org.into();
        Self {
            api_key: api_key.into(),
            default_organization: org.clone(),
            organizations: vec![org],
        }
    }

    pub fn has_organization(&self, org: &str) -> bool {
        self.organizations.iter().any(|o| o == org)
    }
}
