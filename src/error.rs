//! Errors raised while resolving entrypoints.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures during entrypoint discovery.
///
/// Missing optional directories and empty pattern matches never produce an error; they are
/// logged and contribute nothing.
#[derive(Debug, Error)]
pub enum EntrypointError {
  /// A package declaration file exists but could not be read.
  #[error("failed to read entrypoint declaration {}: {source}", path.display())]
  ReadDeclaration {
    /// Declaration file that failed to load.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// A package declaration file is not a JSON list of pattern strings.
  #[error("failed to parse entrypoint declaration {}: {source}", path.display())]
  ParseDeclaration {
    /// Declaration file that failed to parse.
    path: PathBuf,
    /// Underlying parse error.
    #[source]
    source: serde_json::Error,
  },
  /// A pattern uses a wildcard placement other than `Dir/*.ext` or `Dir/*/*.ext`.
  #[error("unsupported entrypoint pattern '{pattern}': {reason}")]
  UnsupportedPattern {
    /// Pattern as written.
    pattern: String,
    /// Why the pattern was rejected.
    reason: &'static str,
  },
  /// A file-name wildcard could not be compiled into a matcher.
  #[error("invalid file name pattern '{pattern}': {source}")]
  InvalidMatcher {
    /// File-name segment as written.
    pattern: String,
    /// Underlying regex error.
    #[source]
    source: regex::Error,
  },
  /// The project configuration file could not be loaded.
  #[error("failed to load configuration {}: {message}", path.display())]
  Config {
    /// Configuration file that failed to load.
    path: PathBuf,
    /// Human readable cause.
    message: String,
  },
}

/// Result type used by the discovery side of the crate.
pub type EntrypointResult<T> = Result<T, EntrypointError>;
