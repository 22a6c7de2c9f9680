//! Byte-level access to the configuration file
//!
//! [`ConfigFile`] abstracts the single backing file as a byte store:
//! existence check, whole-file read, whole-value write. It never
//! interprets the content; decoding happens through the
//! [`ReaderResult`] returned by [`ConfigFile::read`].

use super::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Owner read/write only. The file holds an API credential.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stable identity of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file currently exists. Absence is a reportable
    /// state, not an error.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole file into an immutable buffer.
    pub fn read(&self) -> Result<ReaderResult, StoreError> {
        let bytes = fs::read(&self.path)?;
        Ok(ReaderResult { bytes })
    }

    /// Serialize `value` as JSON and replace the file content with it.
    /// Returns the file's own path on success.
    pub fn write<T: Serialize>(&self, value: &T) -> Result<PathBuf, StoreError> {
        let bytes = serde_json::to_vec(value)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = open_for_rewrite(&self.path)?;
        file.write_all(&bytes)?;

        Ok(self.path.clone())
    }
}

#[cfg(unix)]
fn open_for_rewrite(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_rewrite(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Immutable view of a previously-read file, decodable into a
/// caller-chosen shape.
#[derive(Debug)]
pub struct ReaderResult {
    bytes: Vec<u8>,
}

impl ReaderResult {
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn config_file(dir: &TempDir) -> ConfigFile {
        ConfigFile::new(dir.path().join("test.json"))
    }

    #[test]
    fn test_path_identity() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        assert_eq!(file.path(), dir.path().join("test.json"));
    }

    #[test]
    fn test_exists() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        assert!(!file.exists());
        file.write(&"test").unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_write_returns_own_path() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        let path = file.write(&"test").unwrap();
        assert_eq!(path, dir.path().join("test.json"));
    }

    #[test]
    fn test_write_read_decode_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        let value = vec!["a".to_string(), "b".to_string()];
        file.write(&value).unwrap();

        let decoded: Vec<String> = file.read().unwrap().decode().unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        let err = file.read().unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn test_decode_malformed_content_fails() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        std::fs::write(file.path(), b"not json at all").unwrap();

        let result = file.read().unwrap();
        let err = result.decode::<Vec<String>>().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn test_unserializable_value_fails_without_panic() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        // serde_json rejects maps whose keys are not strings
        let mut value = HashMap::new();
        value.insert(vec![1u8, 2], "x");

        let err = file.write(&value).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_created_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        file.write(&"test").unwrap();

        let mode = std::fs::metadata(file.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let file = config_file(&dir);

        file.write(&vec!["a"; 100]).unwrap();
        file.write(&"short").unwrap();

        let decoded: String = file.read().unwrap().decode().unwrap();
        assert_eq!(decoded, "short");
    }
}
