//! In-memory cleanup of bundler manifest records.

use std::path::Path;

use tracing::debug;

use crate::asset_paths::{clean_path, normalize_manifest_path, self_reference_candidates};
use crate::models::{Manifest, ManifestEntry, SiteHints};
use crate::naming::entry_name;

/// Counters describing what a normalization pass changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
  /// Records visited.
  pub entries: usize,
  /// Self-imports removed across all records.
  pub removed_imports: usize,
  /// Records that received a logical name.
  pub named: usize,
  /// Records whose existing name was removed.
  pub stripped_names: usize,
}

/// Rewrites manifest records so names match entrypoint naming and self-imports disappear.
#[derive(Debug, Clone, Copy)]
pub struct ManifestNormalizer<'a> {
  sites: &'a [String],
  site_hints: Option<(&'a SiteHints, &'a Path)>,
}

impl<'a> ManifestNormalizer<'a> {
  /// Create a normalizer for the configured sites.
  pub fn new(sites: &'a [String]) -> Self {
    Self {
      sites,
      site_hints: None,
    }
  }

  /// Use hints recorded during discovery. Manifest keys are resolved against `project_root`.
  pub fn with_site_hints(mut self, hints: &'a SiteHints, project_root: &'a Path) -> Self {
    self.site_hints = Some((hints, project_root));
    self
  }

  /// Clean every record of `manifest` in place.
  pub fn normalize(&self, manifest: &mut Manifest) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    for entry in manifest.values_mut() {
      report.entries += 1;
      self.clean_entry(entry, &mut report);
    }
    report
  }

  /// Clean a single record: drop self-imports, then set or strip its logical name.
  ///
  /// Records without `src` are left untouched.
  pub fn clean_entry(&self, entry: &mut ManifestEntry, report: &mut NormalizeReport) {
    let Some(src) = entry.src.as_deref() else {
      return;
    };
    let source = normalize_manifest_path(src);

    if let Some(imports) = entry.imports.take() {
      let mut kept = Vec::with_capacity(imports.len());
      for import in imports {
        if is_self_import(&source, &import) {
          debug!(src = %source, import = %import, "removed self-import from manifest entry");
          report.removed_imports += 1;
        } else {
          kept.push(normalize_manifest_path(&import));
        }
      }
      entry.imports = Some(kept);
    }

    match entry_name(&source, self.sites, self.site_hint(&source)) {
      Some(name) => {
        entry.name = Some(name);
        report.named += 1;
      }
      None => {
        if entry.name.take().is_some() {
          report.stripped_names += 1;
        }
      }
    }
  }

  fn site_hint(&self, source: &str) -> Option<&'a str> {
    let (hints, project_root) = self.site_hints?;
    hints.get(&clean_path(&project_root.join(source)))
  }
}

fn is_self_import(source: &str, import: &str) -> bool {
  self_reference_candidates(source, import)
    .iter()
    .any(|candidate| candidate == source)
}
