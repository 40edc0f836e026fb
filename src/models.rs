//! Data structures produced while resolving entrypoints and cleaning the bundler manifest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use same_file::is_same_file;
use serde::{Deserialize, Serialize};

use crate::asset_paths::to_forward_slashes;

/// A concrete file produced by expanding one source pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
  /// Absolute path of the discovered file.
  pub path: PathBuf,
  /// Raw pattern string the file was expanded from.
  pub pattern: String,
  /// Site namespace inferred from the path, if any.
  pub site_hint: Option<String>,
}

/// Site namespace hints keyed by absolute file path.
///
/// Populated once during root-folder discovery and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct SiteHints {
  hints: BTreeMap<PathBuf, String>,
}

impl SiteHints {
  /// Record a hint for `path` unless one is already present.
  ///
  /// Returns `true` when the hint was stored.
  pub fn record(&mut self, path: &Path, site: &str) -> bool {
    if self.hints.contains_key(path) {
      return false;
    }
    self.hints.insert(path.to_path_buf(), site.to_string());
    true
  }

  /// Look up the hint recorded for `path`.
  pub fn get(&self, path: &Path) -> Option<&str> {
    self.hints.get(path).map(String::as_str)
  }

  /// Number of recorded hints.
  pub fn len(&self) -> usize {
    self.hints.len()
  }

  /// Returns `true` when no hints were recorded.
  pub fn is_empty(&self) -> bool {
    self.hints.is_empty()
  }
}

/// Outcome of registering a path in an [`EntrypointMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
  /// The path was stored under the requested name.
  Inserted(String),
  /// The same path was already stored under the requested name.
  AlreadyRegistered(String),
  /// The requested name belonged to another path; the entry was stored under a suffixed name.
  Renamed {
    /// Name that was requested.
    requested: String,
    /// Name the path was stored under.
    assigned: String,
  },
}

/// Insertion-ordered mapping from logical entry name to absolute file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntrypointMap {
  entries: IndexMap<String, PathBuf>,
}

impl EntrypointMap {
  /// Create an empty map.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register `path` under `name`, suffixing the name with the current map size on collision.
  ///
  /// The first path registered under a name keeps the bare name. Registering a path that is
  /// already stored under `name` or one of its suffixed forms leaves the map untouched.
  pub fn register(&mut self, name: String, path: PathBuf) -> Registration {
    let Some(existing) = self.entries.get(&name) else {
      self.entries.insert(name.clone(), path);
      return Registration::Inserted(name);
    };

    if same_path(existing, &path) {
      return Registration::AlreadyRegistered(name);
    }

    if let Some(assigned) = self.suffixed_key_for(&name, &path) {
      return Registration::AlreadyRegistered(assigned);
    }

    let mut counter = self.entries.len();
    let mut candidate = format!("{name}_{counter}");
    while self.entries.contains_key(&candidate) {
      counter += 1;
      candidate = format!("{name}_{counter}");
    }

    self.entries.insert(candidate.clone(), path);
    Registration::Renamed {
      requested: name,
      assigned: candidate,
    }
  }

  /// Suffixed key (`<name>_<n>`) that already holds `path`.
  fn suffixed_key_for(&self, name: &str, path: &Path) -> Option<String> {
    self
      .entries
      .iter()
      .find(|(key, existing)| {
        key
          .strip_prefix(name)
          .and_then(|rest| rest.strip_prefix('_'))
          .is_some_and(|counter| !counter.is_empty() && counter.bytes().all(|b| b.is_ascii_digit()))
          && same_path(existing, path)
      })
      .map(|(key, _)| key.clone())
  }

  /// Path registered under `name`.
  pub fn get(&self, name: &str) -> Option<&Path> {
    self.entries.get(name).map(PathBuf::as_path)
  }

  /// Iterate over `(name, path)` pairs in registration order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
    self
      .entries
      .iter()
      .map(|(name, path)| (name.as_str(), path.as_path()))
  }

  /// Logical names in registration order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  /// Number of registered entrypoints.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when nothing has been registered.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Bundler input table with forward-slash paths, in registration order.
  pub fn to_bundler_input(&self) -> IndexMap<String, String> {
    self
      .iter()
      .map(|(name, path)| (name.to_string(), to_forward_slashes(path)))
      .collect()
  }
}

fn same_path(left: &Path, right: &Path) -> bool {
  left == right || is_same_file(left, right).unwrap_or(false)
}

/// One record of the bundler's build manifest.
///
/// Fields the normalizer does not touch are kept in `extra` and written back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ManifestEntry {
  /// Source file the record was produced from, relative to the bundler root.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub src: Option<String>,
  /// Emitted output file.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
  /// Keys of the manifest records this record imports.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub imports: Option<Vec<String>>,
  /// Logical name of the record.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Remaining bundler fields (`isEntry`, `css`, `assets`, ...).
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Build manifest keyed by source key, in the order the bundler wrote it.
pub type Manifest = IndexMap<String, ManifestEntry>;
