//! Helpers used to filter which packages take part in entrypoint discovery.

use std::collections::BTreeSet;

use crate::config::PackageSelectionConfig;

/// Trait describing selection filters for package directories.
pub trait PackageInclusion {
  /// Returns `true` when the package should be scanned for entrypoints.
  fn is_included(&self, package: &str) -> bool;
}

/// Include/exclude filter over package directory names.
#[derive(Debug, Clone, Default)]
pub struct PackageSelection {
  include: Option<BTreeSet<String>>,
  exclude: BTreeSet<String>,
}

impl PackageSelection {
  /// Determine whether a package should be scanned. Exclusions always win.
  pub fn is_included(&self, package: &str) -> bool {
    if self.exclude.contains(package) {
      return false;
    }

    match &self.include {
      Some(include) => include.contains(package),
      None => true,
    }
  }

  /// Returns true when no filtering rules are active.
  pub fn is_unfiltered(&self) -> bool {
    self.include.is_none() && self.exclude.is_empty()
  }
}

impl PackageInclusion for PackageSelection {
  fn is_included(&self, package: &str) -> bool {
    PackageSelection::is_included(self, package)
  }
}

impl From<PackageSelectionConfig> for PackageSelection {
  fn from(config: PackageSelectionConfig) -> Self {
    let include = normalise_list(config.include);
    let exclude = normalise_list(config.exclude);

    Self {
      include: (!include.is_empty()).then_some(include),
      exclude,
    }
  }
}

/// Convert a list of raw package names into a sorted, de-duplicated set.
///
/// Values are trimmed and empty entries are discarded.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| value.trim().trim_matches('/').to_string())
    .filter(|value| !value.is_empty())
    .collect()
}
