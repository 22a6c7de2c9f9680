//! GitHub API types

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    /// Primary language; GitHub reports `null` for repositories it
    /// has not classified.
    pub language: Option<String>,
    pub ssh_url: String,
}

impl Repository {
    /// Label shown in selection prompts: `"{name} - {language}"`.
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}",
            self.name,
            self.language.as_deref().unwrap_or("unknown")
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepositoryList {
    pub repositories: Vec<Repository>,
}

impl RepositoryList {
    pub fn display_names(&self) -> Vec<String> {
        self.repositories
            .iter()
            .map(Repository::display_name)
            .collect()
    }

    /// Map a prompt label back to the repository it names.
    pub fn find_by_display_name(&self, name: &str) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.display_name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            language: language.map(str::to_string),
            ssh_url: format!("git@github.com:acme/{}.git", name),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(repo("orc", Some("Rust")).display_name(), "orc - Rust");
        assert_eq!(repo("docs", None).display_name(), "docs - unknown");
    }

    #[test]
    fn test_display_names_preserve_order() {
        let list = RepositoryList {
            repositories: vec![repo("b", Some("Go")), repo("a", Some("Rust"))],
        };

        assert_eq!(list.display_names(), vec!["b - Go", "a - Rust"]);
    }

    #[test]
    fn test_find_by_display_name() {
        let list = RepositoryList {
            repositories: vec![repo("orc", Some("Rust")), repo("docs", None)],
        };

        let found = list.find_by_display_name("docs - unknown").unwrap();
        assert_eq!(found.name, "docs");

        assert!(list.find_by_display_name("orc - Go").is_none());
    }

    #[test]
    fn test_deserialize_repository() {
        let json = r#"{
            "name": "orc",
            "language": null,
            "ssh_url": "git@github.com:acme/orc.git",
            "full_name": "acme/orc"
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "orc");
        assert!(repo.language.is_none());
        assert_eq!(repo.ssh_url, "git@github.com:acme/orc.git");
    }
}
