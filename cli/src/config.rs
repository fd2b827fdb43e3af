use std::env::VarError;
use std::path::PathBuf;

use error_stack::{Report, ResultExt};

use crate::error::CliError;

const DEFAULT_LOG_DIR: &str = "./logs/";
const DEFAULT_LOG_FILE: &str = "bookstore.log";
const DEFAULT_FILTER: &str = "application=debug,bookstore=debug";

/// Reads `key` from the process environment or `.env`. A missing variable is
/// `Ok(None)`.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, CliError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(Report::new(e))
            .change_context(CliError::Config)
            .attach_printable_lazy(|| format!("Failed to read `{key}`")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub filter: String,
}

impl LogConfig {
    pub fn from_env() -> error_stack::Result<Self, CliError> {
        Ok(Self {
            directory: env("BOOKSTORE_LOG_DIR")?
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())
                .into(),
            file_prefix: env("BOOKSTORE_LOG_FILE")?.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            filter: env("RUST_LOG")?.unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        })
    }
}
