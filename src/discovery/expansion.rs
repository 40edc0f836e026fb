//! Expansion of source patterns against the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::asset_paths::clean_path;
use crate::discovery::pattern::{FileNameMatcher, PatternShape, SourcePattern};

/// Expand `pattern` relative to `base`, returning absolute file paths.
///
/// Missing directories and empty matches are logged and yield nothing. Directory listings are
/// sorted by file name so results are stable across platforms.
pub fn expand_pattern(base: &Path, pattern: &SourcePattern, ignore_underscore: bool) -> Vec<PathBuf> {
  match pattern.shape() {
    PatternShape::Literal(relative) => vec![clean_path(&base.join(relative))],
    PatternShape::Files { dir, matcher } => {
      let dir = clean_path(&base.join(dir));
      if !dir.is_dir() {
        warn!(
          pattern = pattern.as_str(),
          dir = %dir.display(),
          "entrypoint directory does not exist"
        );
        return Vec::new();
      }

      let files = collect_matching_files(&dir, matcher, ignore_underscore);
      if files.is_empty() {
        warn!(pattern = pattern.as_str(), dir = %dir.display(), "no files match entrypoint pattern");
      }
      files
    }
    PatternShape::NestedFiles { dir, matcher } => {
      let dir = clean_path(&base.join(dir));
      if !dir.is_dir() {
        warn!(
          pattern = pattern.as_str(),
          dir = %dir.display(),
          "entrypoint directory does not exist"
        );
        return Vec::new();
      }

      let files: Vec<PathBuf> = sorted_children(&dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .flat_map(|subdir| collect_matching_files(&subdir, matcher, ignore_underscore))
        .collect();

      if files.is_empty() {
        warn!(pattern = pattern.as_str(), dir = %dir.display(), "no files match entrypoint pattern");
      }
      files
    }
  }
}

/// Regular files directly inside `dir` whose name satisfies `matcher`.
fn collect_matching_files(dir: &Path, matcher: &FileNameMatcher, ignore_underscore: bool) -> Vec<PathBuf> {
  sorted_children(dir)
    .into_iter()
    .filter(|path| path.is_file())
    .filter(|path| {
      let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
      };
      if ignore_underscore && name.starts_with('_') {
        debug!(file = %path.display(), "skipping underscore-prefixed entrypoint");
        return false;
      }
      matcher.is_match(name)
    })
    .collect()
}

/// Children of `dir` sorted by file name; unreadable directories are logged and yield nothing.
pub(crate) fn sorted_children(dir: &Path) -> Vec<PathBuf> {
  let entries = match fs::read_dir(dir) {
    Ok(entries) => entries,
    Err(err) => {
      warn!(dir = %dir.display(), error = %err, "failed to list directory");
      return Vec::new();
    }
  };

  let mut children: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
  children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  children
}
