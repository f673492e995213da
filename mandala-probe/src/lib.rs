//! Smoke tests for the Buddhist Character App backend
//!
//! Runs a fixed sequence of checks against `<backend>/api`: connectivity,
//! CORS preflight, status creation, status listing and a write-then-read
//! persistence round. Results are printed as they happen and summarised at
//! the end.

mod checks;
mod env_file;
mod report;

pub use checks::{BackendTester, ProbeOptions, TEST_CLIENT_NAME};
pub use env_file::{api_base, parse_backend_url, read_backend_url, BACKEND_URL_KEY};
pub use report::{Report, TestResult, RULE};

use std::path::PathBuf;
use thiserror::Error;

/// Error types for probe setup. Failed checks are not errors; they land in
/// the [`Report`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} not found in {}", BACKEND_URL_KEY, path.display())]
    MissingBackendUrl { path: PathBuf },

    #[error("HTTP client error: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Resolve the backend URL: an explicit value wins, otherwise the env file
/// must provide one.
pub fn resolve_backend_url(explicit: Option<String>, env_file: &std::path::Path) -> Result<String> {
    if let Some(url) = explicit {
        return Ok(url);
    }
    read_backend_url(env_file)?.ok_or_else(|| Error::MissingBackendUrl {
        path: env_file.to_path_buf(),
    })
}

/// Run every check against `backend_url`; true when nothing failed.
pub async fn run(backend_url: &str, options: ProbeOptions) -> Result<bool> {
    let mut tester = BackendTester::new(backend_url, options)?;
    Ok(tester.run_all().await)
}
