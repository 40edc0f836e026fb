//! Discover entrypoints declared by individual packages.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::discovery::expansion::{expand_pattern, sorted_children};
use crate::discovery::pattern::SourcePattern;
use crate::error::{EntrypointError, EntrypointResult};
use crate::models::ResolvedEntry;
use crate::selection::PackageInclusion;

/// Entrypoints contributed by the packages directory.
#[derive(Debug, Default)]
pub struct PackageDiscovery {
  /// Resolved entries in declaration order.
  pub entries: Vec<ResolvedEntry>,
  /// Declaration files that were read.
  pub declaration_files: Vec<PathBuf>,
}

/// Scan every package below `packages_dir` for a declaration file and expand its patterns.
///
/// A missing or unreadable packages directory is not an error. A declaration file that exists
/// but cannot be read or parsed is.
pub fn discover_package_entrypoints<S: PackageInclusion>(
  packages_dir: &Path,
  declaration_file: &str,
  selection: &S,
) -> EntrypointResult<PackageDiscovery> {
  let mut discovery = PackageDiscovery::default();

  if !packages_dir.is_dir() {
    warn!(dir = %packages_dir.display(), "packages directory not found, skipping package entrypoints");
    return Ok(discovery);
  }

  for package_path in sorted_children(packages_dir) {
    if !package_path.is_dir() {
      continue;
    }

    let Some(package) = package_path.file_name().map(|name| name.to_string_lossy().to_string())
    else {
      continue;
    };
    if package.starts_with('.') {
      continue;
    }

    if !selection.is_included(&package) {
      debug!(package = %package, "package excluded from entrypoint discovery");
      continue;
    }

    let declaration_path = package_path.join(declaration_file);
    if !declaration_path.is_file() {
      continue;
    }

    let patterns = read_declaration(&declaration_path)?;
    let base = declaration_path.parent().unwrap_or(package_path.as_path());

    for raw in patterns {
      let pattern = SourcePattern::parse(&raw)?;
      for path in expand_pattern(base, &pattern, false) {
        debug!(package = %package, file = %path.display(), "package entrypoint");
        discovery.entries.push(ResolvedEntry {
          path,
          pattern: raw.clone(),
          site_hint: None,
        });
      }
    }

    discovery.declaration_files.push(declaration_path);
  }

  Ok(discovery)
}

/// Read a declaration file as an ordered list of pattern strings.
pub fn read_declaration(path: &Path) -> EntrypointResult<Vec<String>> {
  let content = fs::read_to_string(path).map_err(|source| EntrypointError::ReadDeclaration {
    path: path.to_path_buf(),
    source,
  })?;

  serde_json::from_str(&content).map_err(|source| EntrypointError::ParseDeclaration {
    path: path.to_path_buf(),
    source,
  })
}
