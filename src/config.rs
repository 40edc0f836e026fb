//! Project configuration describing where entrypoints live and where the bundler writes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EntrypointError, EntrypointResult};
use crate::project::{ProjectLayout, RootBuildLayout};
use crate::selection::PackageSelection;

/// Configuration file names searched for in the project root, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = [
  "entrypoints.config.json",
  "entrypoints.config.yaml",
  "entrypoints.config.yml",
];

/// Discoverable project configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
  /// Site identifiers used to namespace entrypoints.
  pub sites: Vec<String>,
  /// Directory holding one subdirectory per package, relative to the project root.
  pub packages_dir: String,
  /// Location of the entrypoint declaration file inside each package.
  pub declaration_file: String,
  /// Bundler output directory, relative to the project root.
  pub out_dir: String,
  /// Location of the bundler manifest inside the output directory.
  pub manifest_file: String,
  /// Discovery of project-level sources outside any package.
  pub root_build: RootBuildConfig,
  /// Include/exclude filters applied to package directory names.
  pub packages: PackageSelectionConfig,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      sites: Vec::new(),
      packages_dir: "packages".into(),
      declaration_file: "Configuration/ViteEntrypoints.json".into(),
      out_dir: "public/_assets/vite".into(),
      manifest_file: ".vite/manifest.json".into(),
      root_build: RootBuildConfig::default(),
      packages: PackageSelectionConfig::default(),
    }
  }
}

/// Options for discovering entrypoints in the project-level frontend folder.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootBuildConfig {
  /// Whether the root folder is scanned at all.
  pub enabled: bool,
  /// Root folder, relative to the project root.
  pub path: String,
  /// Patterns expanded against the root folder, in order.
  pub patterns: Vec<String>,
  /// Skip files whose name starts with an underscore (partials).
  pub ignore_underscore: bool,
}

impl Default for RootBuildConfig {
  fn default() -> Self {
    Self {
      enabled: true,
      path: "Build/Frontend".into(),
      patterns: vec![
        "Styles/*.scss".into(),
        "JavaScript/*.js".into(),
        "Styles/*/*.scss".into(),
        "JavaScript/*/*.js".into(),
      ],
      ignore_underscore: false,
    }
  }
}

/// Package directory names to include or exclude from discovery.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PackageSelectionConfig {
  /// When non-empty, only these packages are scanned.
  pub include: Vec<String>,
  /// Packages that are never scanned.
  pub exclude: Vec<String>,
}

impl ProjectConfig {
  /// Load the first configuration file found in `project_root`, or defaults when there is none.
  pub fn discover(project_root: &Path) -> EntrypointResult<Self> {
    for name in DEFAULT_CONFIG_FILES {
      let candidate = project_root.join(name);
      if candidate.is_file() {
        debug!(path = %candidate.display(), "loading project configuration");
        return Self::from_path(&candidate);
      }
    }

    debug!("no project configuration found, using defaults");
    Ok(Self::default())
  }

  /// Read configuration from a JSON or YAML file, chosen by extension.
  pub fn from_path(path: &Path) -> EntrypointResult<Self> {
    let content = fs::read_to_string(path).map_err(|err| EntrypointError::Config {
      path: path.to_path_buf(),
      message: err.to_string(),
    })?;

    let is_yaml = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
      serde_yaml::from_str(&content).map_err(|err| err.to_string())
    } else {
      serde_json::from_str(&content).map_err(|err| err.to_string())
    };

    parsed.map_err(|message| EntrypointError::Config {
      path: path.to_path_buf(),
      message,
    })
  }

  /// Convert the configuration into absolute paths rooted at `project_root`.
  pub fn into_layout(self, project_root: &Path) -> ProjectLayout {
    let root_build = self.root_build.enabled.then(|| RootBuildLayout {
      dir: resolve(project_root, &self.root_build.path),
      patterns: self.root_build.patterns,
      ignore_underscore: self.root_build.ignore_underscore,
    });
    let out_dir = resolve(project_root, &self.out_dir);

    ProjectLayout {
      project_root: project_root.to_path_buf(),
      packages_dir: resolve(project_root, &self.packages_dir),
      declaration_file: self.declaration_file,
      manifest_path: resolve(&out_dir, &self.manifest_file),
      out_dir,
      root_build,
      sites: self.sites,
      selection: PackageSelection::from(self.packages),
    }
  }
}

fn resolve(base: &Path, relative: &str) -> PathBuf {
  crate::asset_paths::clean_path(&base.join(relative))
}
