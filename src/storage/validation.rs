//! Path validation
//!
//! Lexical path resolution and the base-directory containment check.
//! Nothing here touches the filesystem or follows symlinks.

use std::path::{Component, Path, PathBuf};

use crate::error::UploadError;

/// Normalizes a path lexically: drops `.`, resolves `..` against the
/// preceding normal component and collapses redundant separators.
///
/// `..` directly under the root stays at the root; leading `..` of a
/// relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(name) => normalized.push(name),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Resolves `rel_path` against `base_path` and verifies the result stays
/// below the base directory.
///
/// Leading `/` on `rel_path` are stripped so an absolute-looking client path
/// is still joined under the base. Containment is checked per component,
/// so base `/a/b` never admits `/a/bc`.
pub fn resolve_upload_path(base_path: &str, rel_path: &str) -> Result<PathBuf, UploadError> {
    let rel_path = rel_path.trim_start_matches('/');
    if rel_path.is_empty() {
        return Err(UploadError::Validation("rel_path is empty".into()));
    }

    let base = normalize_lexically(Path::new(base_path));
    let target = normalize_lexically(&Path::new(base_path).join(rel_path));

    if !descends_from(&target, &base) {
        return Err(UploadError::PathTraversal(target));
    }

    if target == base {
        return Err(UploadError::Validation(
            "rel_path resolves to the base directory".into(),
        ));
    }

    Ok(target)
}

/// Component-wise containment of two normalized paths.
///
/// A base of `.` has no components to compare, so any relative path that
/// does not climb out with `..` descends from it.
fn descends_from(target: &Path, base: &Path) -> bool {
    if base == Path::new(".") {
        return !matches!(
            target.components().next(),
            Some(Component::ParentDir | Component::RootDir | Component::Prefix(_))
        );
    }
    target.starts_with(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(path: &str) -> PathBuf {
        normalize_lexically(Path::new(path))
    }

    #[test]
    fn normalize_collapses_dots_and_separators() {
        assert_eq!(normalized("/srv//files/./a/../b.txt"), PathBuf::from("/srv/files/b.txt"));
        assert_eq!(normalized("/srv/files/"), PathBuf::from("/srv/files"));
        assert_eq!(normalized("a/./b/"), PathBuf::from("a/b"));
    }

    #[test]
    fn normalize_stops_parent_dir_at_root() {
        assert_eq!(normalized("/../../etc"), PathBuf::from("/etc"));
        assert_eq!(normalized("/.."), PathBuf::from("/"));
    }

    #[test]
    fn normalize_keeps_leading_parent_dirs_of_relative_paths() {
        assert_eq!(normalized("a/../../b"), PathBuf::from("../b"));
        assert_eq!(normalized("a/.."), PathBuf::from("."));
    }

    #[test]
    fn resolves_plain_relative_path() {
        let path = resolve_upload_path("/srv/files/", "a/b.txt").unwrap();
        assert_eq!(path, PathBuf::from("/srv/files/a/b.txt"));
    }

    #[test]
    fn base_without_trailing_separator_resolves_the_same() {
        let with = resolve_upload_path("/srv/files/", "a/b.txt").unwrap();
        let without = resolve_upload_path("/srv/files", "a/b.txt").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn strips_leading_separators_from_rel_path() {
        let path = resolve_upload_path("/srv/files", "//nested/c.png").unwrap();
        assert_eq!(path, PathBuf::from("/srv/files/nested/c.png"));
    }

    #[test]
    fn allows_parent_dirs_that_stay_inside_base() {
        let path = resolve_upload_path("/srv/files", "a/../b/./c.txt").unwrap();
        assert_eq!(path, PathBuf::from("/srv/files/b/c.txt"));
    }

    #[test]
    fn blocks_traversal_out_of_base() {
        let err = resolve_upload_path("/srv/files/", "../../etc/passwd").unwrap_err();
        match err {
            UploadError::PathTraversal(path) => assert_eq!(path, PathBuf::from("/etc/passwd")),
            other => panic!("expected traversal error, got {other:?}"),
        }
    }

    #[test]
    fn blocks_sibling_directory_sharing_a_prefix() {
        let err = resolve_upload_path("/a/b", "../bc/file.txt").unwrap_err();
        assert!(matches!(err, UploadError::PathTraversal(_)));
    }

    #[test]
    fn rejects_empty_rel_path() {
        for rel in ["", "/", "///"] {
            let err = resolve_upload_path("/srv/files", rel).unwrap_err();
            assert!(matches!(err, UploadError::Validation(_)), "rel_path {rel:?}");
        }
    }

    #[test]
    fn rejects_rel_path_that_collapses_to_base() {
        let err = resolve_upload_path("/srv/files", "a/..").unwrap_err();
        assert!(matches!(err, UploadError::Validation(_)));
    }

    #[test]
    fn relative_base_paths_are_contained_too() {
        let path = resolve_upload_path("uploads", "x/y.bin").unwrap();
        assert_eq!(path, PathBuf::from("uploads/x/y.bin"));

        let err = resolve_upload_path("uploads", "../outside.bin").unwrap_err();
        assert!(matches!(err, UploadError::PathTraversal(_)));
    }

    #[test]
    fn current_directory_base_admits_relative_targets() {
        for base in [".", "./", ".//"] {
            let path = resolve_upload_path(base, "x.txt").unwrap();
            assert_eq!(path, PathBuf::from("x.txt"), "base {base:?}");
        }

        let path = resolve_upload_path(".", "a/./b/c.txt").unwrap();
        assert_eq!(path, PathBuf::from("a/b/c.txt"));
    }

    #[test]
    fn current_directory_base_still_blocks_traversal() {
        for rel in ["../x.txt", "a/../../x.txt"] {
            let err = resolve_upload_path("./", rel).unwrap_err();
            assert!(matches!(err, UploadError::PathTraversal(_)), "rel_path {rel:?}");
        }

        let err = resolve_upload_path(".", "a/..").unwrap_err();
        assert!(matches!(err, UploadError::Validation(_)));
    }
}
