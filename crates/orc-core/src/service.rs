//! Domain-level operations over the persisted configuration
//!
//! Every mutation is a full read-decode-mutate-encode-write cycle
//! against the backing [`ConfigFile`]; the file always holds one
//! complete [`Config`] value. Failures are wrapped by the stage that
//! produced them (read, decode, write).

use crate::storage::ConfigFile;
use crate::{Config, Error, Result};
use std::path::{Path, PathBuf};

pub struct ConfigService {
    file: ConfigFile,
}

impl ConfigService {
    pub fn new(file: ConfigFile) -> Self {
        Self { file }
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> &Path {
        self.file.path()
    }

    /// Whether the configuration file exists yet.
    pub fn check_config_file(&self) -> bool {
        self.file.exists()
    }

    /// Create the configuration file with a single organization, which
    /// becomes the default. Returns the created file's path.
    pub fn create(&self, api_key: &str, org: &str) -> Result<PathBuf> {
        let conf = Config::new(api_key, org);
        self.file.write(&conf).map_err(Error::Writer)
    }

    /// Read and decode the current configuration.
    pub fn read(&self) -> Result<Config> {
        let result = self.file.read().map_err(Error::Reader)?;
        result.decode().map_err(Error::Decoder)
    }

    /// Set the default organization unconditionally and persist. The
    /// new default is not required to be a member of the organization
    /// list.
    pub fn update_default_organization(&self, org: &str) -> Result<()> {
        let mut conf = self.read()?;
        conf.default_organization = org.to_string();
        self.file.write(&conf).map_err(Error::Writer)?;
        Ok(())
    }

    /// Add an organization to the list and persist. Returns `true`
    /// when it was already present; the write is skipped in that case.
    pub fn add_organization(&self, org: &str) -> Result<bool> {
        let mut conf = self.read()?;

        if conf.has_organization(org) {
            return Ok(true);
        }

        conf.organizations.push(org.to_string());
        self.file.write(&conf).map_err(Error::Writer)?;

        Ok(false)
    }

    /// Remove an organization from the list and persist. Removing an
    /// absent organization is a no-op, not an error.
    pub fn delete_organization(&self, org: &str) -> Result<()> {
        let mut conf = self.read()?;
        conf.organizations.retain(|o| o != org);
        self.file.write(&conf).map_err(Error::Writer)?;
        Ok(())
    }
}
