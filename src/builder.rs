//! Entrypoint build orchestrator combining root-folder and package discovery.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::discovery::{discover_package_entrypoints, discover_root_entrypoints};
use crate::error::EntrypointResult;
use crate::manifest::ManifestNormalizer;
use crate::models::{EntrypointMap, Registration, ResolvedEntry, SiteHints};
use crate::naming::logical_name;
use crate::project::ProjectLayout;
use crate::selection::PackageInclusion;

/// Everything produced by one discovery pass.
#[derive(Debug, Default)]
pub struct EntrypointArtifacts {
  /// Bundler input: logical name to absolute path.
  pub entrypoints: EntrypointMap,
  /// Every resolved file in naming order (root folder first, then packages).
  pub resolved: Vec<ResolvedEntry>,
  /// Site hints recorded during root-folder discovery.
  pub site_hints: SiteHints,
  /// Files and directories whose change should trigger regeneration.
  pub watch_paths: Vec<PathBuf>,
}

/// High-level helper for resolving the entrypoints of a project.
pub struct EntrypointBuilder<'a> {
  layout: &'a ProjectLayout,
}

impl<'a> EntrypointBuilder<'a> {
  /// Create a builder for the provided layout.
  pub fn new(layout: &'a ProjectLayout) -> Self {
    Self { layout }
  }

  /// Resolve entrypoints using the package selection from the layout.
  pub fn build(&self) -> EntrypointResult<EntrypointArtifacts> {
    if !self.layout.selection.is_unfiltered() {
      debug!("package selection active");
    }
    self.build_with(&self.layout.selection)
  }

  /// Resolve entrypoints, filtering packages with `selection`.
  pub fn build_with<S: PackageInclusion>(&self, selection: &S) -> EntrypointResult<EntrypointArtifacts> {
    let layout = self.layout;
    let mut site_hints = SiteHints::default();
    let mut resolved = Vec::new();
    let mut watch_paths = vec![layout.packages_dir.clone()];

    if let Some(root_build) = &layout.root_build {
      resolved.extend(discover_root_entrypoints(
        root_build,
        &layout.sites,
        &mut site_hints,
      )?);
      watch_paths.push(root_build.dir.clone());
    }

    let packages =
      discover_package_entrypoints(&layout.packages_dir, &layout.declaration_file, selection)?;
    resolved.extend(packages.entries);
    watch_paths.extend(packages.declaration_files);

    let entrypoints = register_entrypoints(&resolved, &layout.sites);
    info!(
      entrypoints = entrypoints.len(),
      site_hints = site_hints.len(),
      "resolved frontend entrypoints"
    );

    Ok(EntrypointArtifacts {
      entrypoints,
      resolved,
      site_hints,
      watch_paths,
    })
  }

  /// Manifest normalizer sharing this layout's sites and the hints from `artifacts`.
  pub fn manifest_normalizer<'b>(&'b self, artifacts: &'b EntrypointArtifacts) -> ManifestNormalizer<'b> {
    ManifestNormalizer::new(&self.layout.sites)
      .with_site_hints(&artifacts.site_hints, &self.layout.project_root)
  }
}

/// Name every resolved entry and collect them into an [`EntrypointMap`].
///
/// Order matters: the first entry to claim a name keeps it, later distinct files get a numeric
/// suffix.
pub fn register_entrypoints(resolved: &[ResolvedEntry], sites: &[String]) -> EntrypointMap {
  let mut map = EntrypointMap::new();

  for entry in resolved {
    let name = logical_name(
      &entry.path.to_string_lossy(),
      sites,
      entry.site_hint.as_deref(),
    );

    if let Registration::Renamed { requested, assigned } = map.register(name, entry.path.clone()) {
      warn!(
        name = %requested,
        renamed = %assigned,
        file = %entry.path.display(),
        "entrypoint name collision"
      );
    }
  }

  map
}
