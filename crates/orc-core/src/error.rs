//! Error types for configuration persistence
//!
//! Failures are tagged by the stage that produced them (read, decode,
//! write), each wrapping the low-level [`StoreError`] cause.

use crate::storage::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while reading the config file: {0}")]
    Reader(#[source] StoreError),

    #[error("error while decoding the config file: {0}")]
    Decoder(#[source] StoreError),

    #[error("error while writing the config file: {0}")]
    Writer(#[source] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
