//! Post-build cleanup of the bundler manifest.

mod normalize;
mod store;

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

pub use normalize::{ManifestNormalizer, NormalizeReport};
pub use store::{load_manifest, write_manifest};

/// Load, normalise and atomically rewrite the manifest at `path`.
///
/// A missing manifest is logged and skipped: nothing is written and `None` is returned.
pub fn normalize_manifest_file(
  path: &Path,
  normalizer: &ManifestNormalizer<'_>,
) -> Result<Option<NormalizeReport>> {
  let Some(mut manifest) = load_manifest(path)? else {
    warn!(path = %path.display(), "manifest not found, skipping manifest cleanup");
    return Ok(None);
  };

  let report = normalizer.normalize(&mut manifest);
  write_manifest(path, &manifest)?;

  info!(
    path = %path.display(),
    entries = report.entries,
    removed_imports = report.removed_imports,
    named = report.named,
    stripped_names = report.stripped_names,
    "normalized build manifest"
  );
  Ok(Some(report))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn missing_manifest_performs_no_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".vite/manifest.json");
    let sites: Vec<String> = Vec::new();

    let result = normalize_manifest_file(&path, &ManifestNormalizer::new(&sites)).unwrap();

    assert!(result.is_none());
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
  }

  #[test]
  fn normalizes_manifest_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    fs::write(
      &path,
      r#"{
  "Styles/main.scss": {
    "file": "assets/main-1a2b.css",
    "name": "main",
    "src": "Styles/main.scss",
    "isEntry": true,
    "imports": ["./main.scss", "./other.scss"]
  },
  "Images/logo.png": {
    "file": "assets/logo-3c4d.png",
    "name": "logo",
    "src": "Images/logo.png"
  }
}"#,
    )
    .unwrap();
    let sites: Vec<String> = Vec::new();

    let report = normalize_manifest_file(&path, &ManifestNormalizer::new(&sites))
      .unwrap()
      .expect("manifest exists");

    assert_eq!(report.removed_imports, 1);
    assert_eq!(report.stripped_names, 1);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["Styles/main.scss"]["imports"], serde_json::json!(["other.scss"]));
    assert_eq!(value["Styles/main.scss"]["name"], "global_main");
    assert_eq!(value["Styles/main.scss"]["isEntry"], true);
    assert!(value["Images/logo.png"].get("name").is_none());
  }
}
