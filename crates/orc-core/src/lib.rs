pub mod error;
pub mod models;
pub mod service;
pub mod storage;

pub use error::{Error, Result};
pub use models::Config;
pub use service::ConfigService;
pub use storage::{ConfigFile, StoreError};
