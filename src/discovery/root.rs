//! Discover entrypoints in the project-level frontend folder.

use std::path::Path;

use tracing::{debug, warn};

use crate::discovery::expansion::expand_pattern;
use crate::discovery::pattern::SourcePattern;
use crate::error::EntrypointResult;
use crate::models::{ResolvedEntry, SiteHints};
use crate::naming::match_site;
use crate::project::RootBuildLayout;

/// Expand the root-folder patterns and record a site hint for every file below a site directory.
///
/// Patterns are validated first; a missing root folder then yields nothing. Hints already present in `hints` are left as they are.
pub fn discover_root_entrypoints(
  root: &RootBuildLayout,
  sites: &[String],
  hints: &mut SiteHints,
) -> EntrypointResult<Vec<ResolvedEntry>> {
  let patterns = root
    .patterns
    .iter()
    .map(|raw| SourcePattern::parse(raw))
    .collect::<EntrypointResult<Vec<_>>>()?;

  if !root.dir.is_dir() {
    warn!(dir = %root.dir.display(), "root build directory not found, skipping root entrypoints");
    return Ok(Vec::new());
  }

  let mut entries = Vec::new();
  for pattern in &patterns {
    for path in expand_pattern(&root.dir, pattern, root.ignore_underscore) {
      if let Some(site) = detect_site(&root.dir, &path, sites) {
        if hints.record(&path, site) {
          debug!(file = %path.display(), site, "recorded site hint");
        }
      }

      let site_hint = hints.get(&path).map(str::to_string);
      entries.push(ResolvedEntry {
        path,
        pattern: pattern.as_str().to_string(),
        site_hint,
      });
    }
  }

  Ok(entries)
}

/// First configured site matching any directory segment of `path` below `root_dir`.
fn detect_site<'a>(root_dir: &Path, path: &Path, sites: &'a [String]) -> Option<&'a str> {
  let relative = path.strip_prefix(root_dir).unwrap_or(path);
  let segments: Vec<String> = relative
    .parent()
    .map(|parent| {
      parent
        .components()
        .map(|component| component.as_os_str().to_string_lossy().to_string())
        .collect()
    })
    .unwrap_or_default();

  sites.iter().find_map(|site| {
    segments
      .iter()
      .find_map(|segment| match_site(segment, std::slice::from_ref(site)))
  })
}
