//! Loading and atomically rewriting the bundler manifest.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::models::Manifest;

/// Load the manifest at `path`, returning `None` when it does not exist.
pub fn load_manifest(path: &Path) -> Result<Option<Manifest>> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
    Err(err) => {
      return Err(err).with_context(|| format!("failed to read manifest at {}", path.display()));
    }
  };

  let manifest: Manifest = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse manifest JSON at {}", path.display()))?;
  Ok(Some(manifest))
}

/// Write `manifest` to `path` as pretty-printed JSON.
///
/// The content goes to a temporary file next to `path` which then replaces it, so readers never
/// observe a partially written manifest. Existing file permissions are carried over.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut content =
    serde_json::to_string_pretty(manifest).context("failed to serialise manifest")?;
  content.push('\n');

  let mut file = NamedTempFile::new_in(parent)
    .with_context(|| format!("failed to create temporary manifest in {}", parent.display()))?;
  file
    .write_all(content.as_bytes())
    .context("failed to write temporary manifest")?;
  file
    .as_file()
    .sync_all()
    .context("failed to flush temporary manifest")?;

  if let Ok(metadata) = fs::metadata(path) {
    fs::set_permissions(file.path(), metadata.permissions())
      .context("failed to copy manifest permissions")?;
  }

  file
    .persist(path)
    .map_err(|err| err.error)
    .with_context(|| format!("failed to replace manifest at {}", path.display()))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::ManifestEntry;
  use tempfile::tempdir;

  #[test]
  fn missing_manifest_loads_as_none() {
    let dir = tempdir().unwrap();
    let result = load_manifest(&dir.path().join("manifest.json")).unwrap();
    assert!(result.is_none());
  }

  #[test]
  fn invalid_manifest_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    fs::write(&path, "[1, 2").unwrap();
    assert!(load_manifest(&path).is_err());
  }

  #[test]
  fn rewrites_manifest_in_place_preserving_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    fs::write(
      &path,
      r#"{"b.js":{"file":"b.js","src":"b.js"},"a.js":{"file":"a.js","src":"a.js","isEntry":true}}"#,
    )
    .unwrap();

    let mut manifest = load_manifest(&path).unwrap().unwrap();
    manifest.insert("c.css".into(), ManifestEntry {
      src: Some("c.css".into()),
      ..ManifestEntry::default()
    });
    write_manifest(&path, &manifest).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("}\n"));
    assert!(written.contains("\n  \"b.js\": {"));
    let reloaded = load_manifest(&path).unwrap().unwrap();
    assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["b.js", "a.js", "c.css"]);
    assert_eq!(reloaded["a.js"].extra.get("isEntry"), Some(&serde_json::Value::Bool(true)));

    let leftovers = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
  }
}
