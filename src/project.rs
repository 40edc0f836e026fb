//! Resolved project layout shared by discovery and manifest cleanup.

use std::path::PathBuf;

use crate::selection::PackageSelection;

/// Absolute paths and options for a single build invocation.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
  /// Project root every relative setting was resolved against.
  pub project_root: PathBuf,
  /// Configured site identifiers, in configured order.
  pub sites: Vec<String>,
  /// Directory containing one subdirectory per package.
  pub packages_dir: PathBuf,
  /// Declaration file location relative to each package directory.
  pub declaration_file: String,
  /// Bundler output directory.
  pub out_dir: PathBuf,
  /// Bundler manifest written below the output directory.
  pub manifest_path: PathBuf,
  /// Project-level discovery settings, `None` when disabled.
  pub root_build: Option<RootBuildLayout>,
  /// Package filter applied while scanning `packages_dir`.
  pub selection: PackageSelection,
}

/// Resolved settings for root-folder discovery.
#[derive(Debug, Clone)]
pub struct RootBuildLayout {
  /// Absolute root folder.
  pub dir: PathBuf,
  /// Patterns expanded against `dir`.
  pub patterns: Vec<String>,
  /// Drop underscore-prefixed file names.
  pub ignore_underscore: bool,
}
