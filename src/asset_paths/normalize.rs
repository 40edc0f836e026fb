use std::path::{Component, Path, PathBuf};

/// Normalise a manifest key or import reference.
///
/// Backslashes become forward slashes and a single leading `./` is removed, so keys written by
/// the bundler on any platform compare equal to the source keys they refer to.
pub fn normalize_manifest_path(value: &str) -> String {
    let forward = value.replace('\\', "/");
    match forward.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => forward,
    }
}

/// Render a filesystem path with forward slashes.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Join a relative reference onto a forward-slash directory, resolving `.` and `..` lexically.
///
/// `..` segments that would climb above the start of `dir` are kept so the result never points
/// somewhere the reference did not.
pub fn join_manifest_path(dir: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    segments.join("/")
}

/// Lexically remove `.` and `..` components from a filesystem path.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    cleaned.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_current_directory_marker() {
        assert_eq!(normalize_manifest_path("./main.scss"), "main.scss");
        assert_eq!(normalize_manifest_path("Styles/main.scss"), "Styles/main.scss");
    }

    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        assert_eq!(
            normalize_manifest_path(".\\Styles\\main.scss"),
            "Styles/main.scss"
        );
    }

    #[test]
    fn joins_relative_references_onto_directories() {
        assert_eq!(join_manifest_path("Styles", "./main.scss"), "Styles/main.scss");
        assert_eq!(
            join_manifest_path("Styles/site", "../shared/a.scss"),
            "Styles/shared/a.scss"
        );
        assert_eq!(join_manifest_path("", "../a.js"), "../a.js");
    }

    #[test]
    fn cleans_parent_components() {
        assert_eq!(
            clean_path(Path::new("/project/pkg/Configuration/../Resources/./main.js")),
            PathBuf::from("/project/pkg/Resources/main.js")
        );
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean_path(Path::new("../a/b/..")), PathBuf::from("../a"));
    }
}
