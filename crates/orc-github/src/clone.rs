//! Repository cloning over SSH

use crate::types::Repository;
use crate::Result;
use git2::build::RepoBuilder;
use git2::{Cred, FetchOptions, RemoteCallbacks};
use std::path::{Path, PathBuf};

impl Repository {
    /// Clone this repository into `dest_dir/{name}` using its SSH URL
    /// and credentials from the running SSH agent.
    pub fn clone_into(&self, dest_dir: &Path) -> Result<PathBuf> {
        let target = dest_dir.join(&self.name);

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
        });

        let mut fetch_opts = FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        tracing::info!(repo = %self.name, "cloning repository");

        RepoBuilder::new()
            .fetch_options(fetch_opts)
            .clone(&self.ssh_url, &target)?;

        Ok(target)
    }
}
