//! Parsing of entrypoint source patterns.

use std::path::PathBuf;

use regex::Regex;

use crate::error::{EntrypointError, EntrypointResult};

/// Parsed form of a source pattern.
#[derive(Debug, Clone)]
pub enum PatternShape {
  /// No wildcard: a single file, returned without checking it exists.
  Literal(PathBuf),
  /// `Dir/*.ext`: matching files directly inside `dir`.
  Files {
    /// Directory scanned, relative to the expansion base.
    dir: PathBuf,
    /// File-name matcher.
    matcher: FileNameMatcher,
  },
  /// `Dir/*/*.ext`: matching files inside each immediate subdirectory of `dir`.
  NestedFiles {
    /// Directory whose subdirectories are scanned, relative to the expansion base.
    dir: PathBuf,
    /// File-name matcher.
    matcher: FileNameMatcher,
  },
}

/// A validated source pattern.
#[derive(Debug, Clone)]
pub struct SourcePattern {
  raw: String,
  shape: PatternShape,
}

impl SourcePattern {
  /// Parse `raw`, rejecting any wildcard placement outside the two supported shapes.
  pub fn parse(raw: &str) -> EntrypointResult<Self> {
    let normalized = raw.trim().replace('\\', "/");
    let trimmed = normalized.strip_prefix("./").unwrap_or(&normalized);

    if trimmed.is_empty() {
      return Err(unsupported(raw, "pattern is empty"));
    }

    if !trimmed.contains('*') {
      return Ok(Self {
        raw: raw.to_string(),
        shape: PatternShape::Literal(PathBuf::from(trimmed)),
      });
    }

    let (head, file_segment) = trimmed.rsplit_once('/').unwrap_or(("", trimmed));
    if file_segment.is_empty() || !file_segment.contains('*') {
      return Err(unsupported(
        raw,
        "wildcards are only supported in the file name or the directory directly above it",
      ));
    }

    let matcher = FileNameMatcher::compile(file_segment)?;
    let (parent, last_dir) = head.rsplit_once('/').unwrap_or(("", head));

    let shape = if last_dir == "*" && !parent.contains('*') {
      PatternShape::NestedFiles {
        dir: PathBuf::from(parent),
        matcher,
      }
    } else if !head.contains('*') {
      PatternShape::Files {
        dir: PathBuf::from(head),
        matcher,
      }
    } else {
      return Err(unsupported(
        raw,
        "only a single `*` directory level directly above the file name is supported",
      ));
    };

    Ok(Self {
      raw: raw.to_string(),
      shape,
    })
  }

  /// Pattern as written.
  pub fn as_str(&self) -> &str {
    &self.raw
  }

  /// Parsed shape.
  pub fn shape(&self) -> &PatternShape {
    &self.shape
  }
}

fn unsupported(raw: &str, reason: &'static str) -> EntrypointError {
  EntrypointError::UnsupportedPattern {
    pattern: raw.to_string(),
    reason,
  }
}

/// Case-insensitive matcher for a single file-name segment containing `*` wildcards.
#[derive(Debug, Clone)]
pub struct FileNameMatcher {
  regex: Regex,
}

impl FileNameMatcher {
  /// Compile `segment`: literal text is escaped and every `*` matches any run of characters.
  pub fn compile(segment: &str) -> EntrypointResult<Self> {
    let body = segment
      .split('*')
      .map(regex::escape)
      .collect::<Vec<_>>()
      .join(".*");

    let regex = Regex::new(&format!("(?i)^{body}$")).map_err(|source| {
      EntrypointError::InvalidMatcher {
        pattern: segment.to_string(),
        source,
      }
    })?;

    Ok(Self { regex })
  }

  /// Returns `true` when `file_name` matches.
  pub fn is_match(&self, file_name: &str) -> bool {
    self.regex.is_match(file_name)
  }
}
