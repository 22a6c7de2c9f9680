//! Orc GitHub Integration
//!
//! Client library for listing organization repositories and cloning
//! the selected one over SSH.

pub mod client;
pub mod clone;
pub mod error;
pub mod types;

pub use client::GithubClient;
pub use error::{Error, Result};
pub use types::*;
