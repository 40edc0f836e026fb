//! Logical name derivation shared by entrypoint discovery and manifest cleanup.

use crate::asset_paths::AssetKind;

/// Namespace used when a file belongs to no configured site.
pub const GLOBAL_NAMESPACE: &str = "global";

/// Derive the logical name for `path`.
///
/// Style and script sources become `<site>_<basename>`, where the site is the hint when one is
/// given, otherwise the configured site matching the immediate parent directory, otherwise
/// [`GLOBAL_NAMESPACE`]. Any other path is returned unchanged.
pub fn logical_name(path: &str, sites: &[String], site_hint: Option<&str>) -> String {
  entry_name(path, sites, site_hint).unwrap_or_else(|| path.to_string())
}

/// Like [`logical_name`] but returns `None` for files that carry no logical name.
pub fn entry_name(path: &str, sites: &[String], site_hint: Option<&str>) -> Option<String> {
  if !AssetKind::of(path).is_entrypoint() {
    return None;
  }

  let normalized = path.replace('\\', "/");
  let (parent, file_name) = match normalized.rsplit_once('/') {
    Some((parent, file_name)) => (Some(parent), file_name),
    None => (None, normalized.as_str()),
  };

  let basename = match file_name.rsplit_once('.') {
    Some((stem, _)) if !stem.is_empty() => stem,
    _ => file_name,
  }
  .to_lowercase();

  let namespace = match site_hint {
    Some(site) => site,
    None => parent
      .and_then(|parent| parent.rsplit('/').next())
      .and_then(|dir| match_site(dir, sites))
      .unwrap_or(GLOBAL_NAMESPACE),
  };

  Some(format!("{namespace}_{basename}"))
}

/// Find the configured site matching `segment`, ignoring case.
///
/// The configured spelling is returned so names stay stable regardless of directory casing.
pub fn match_site<'a>(segment: &str, sites: &'a [String]) -> Option<&'a str> {
  let segment = segment.to_lowercase();
  sites
    .iter()
    .find(|site| site.to_lowercase() == segment)
    .map(String::as_str)
}
