//! Gateway configuration read from the process environment.

use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the document store connection string.
pub const MONGO_URI_VAR: &str = "MONGO_URI";

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "INSIGHT_LISTEN_ADDR";

/// Address the gateway listens on unless overridden.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Settings for one gateway process.
#[derive(Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address to bind, e.g. `0.0.0.0:3000`.
    pub listen_addr: String,

    /// Connection string for the document store. `None` when unset or blank.
    pub mongo_uri: Option<String>,
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mongo_uri = lookup(MONGO_URI_VAR).filter(|uri| !uri.trim().is_empty());
        let listen_addr = lookup(LISTEN_ADDR_VAR)
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        Self { listen_addr, mongo_uri }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("listen_addr", &self.listen_addr)
            .field("mongo_uri", &self.mongo_uri.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Outcome of looking for a `.env` file.
#[derive(Debug)]
pub enum EnvFile {
    /// Variables were loaded from this file.
    Loaded(PathBuf),
    /// No file was found; the process environment is used as is.
    Missing,
    /// A file was found but could not be read or parsed.
    Invalid(dotenvy::Error),
}

impl EnvFile {
    /// Load `.env` from the working directory or one of its parents.
    ///
    /// Variables already set in the process environment win.
    #[must_use]
    pub fn load() -> Self {
        Self::from(dotenvy::dotenv())
    }
}

impl From<Result<PathBuf, dotenvy::Error>> for EnvFile {
    fn from(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => EnvFile::Loaded(path),
            Err(e) if e.not_found() => EnvFile::Missing,
            Err(e) => EnvFile::Invalid(e),
        }
    }
}
