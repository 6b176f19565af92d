//! Relative path computation
//!
//! Pure path math: no filesystem access. Paths are decomposed into a root
//! chunk (`/`, a drive such as `C:`, or a `\\server\share` prefix) followed
//! by their segments, so that Windows-style paths are handled the same way
//! on every host.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use crate::error::PathError;

/// A path split into its root chunk and normalized segments
#[derive(Debug, PartialEq, Eq)]
struct PathChunks {
    root: String,
    segments: Vec<String>,
}

impl PathChunks {
    fn parse(path: &str) -> Self {
        let bytes = path.as_bytes();
        let (root, rest, backslash_separates) =
            if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
                (path[..2].to_ascii_uppercase(), &path[2..], true)
            } else if path.starts_with(r"\\") {
                let mut parts = path[2..].splitn(3, ['\\', '/']);
                let server = parts.next().unwrap_or_default();
                let share = parts.next().unwrap_or_default();
                (
                    format!(r"\\{server}\{share}").to_ascii_lowercase(),
                    parts.next().unwrap_or_default(),
                    true,
                )
            } else if path.starts_with('/') || (cfg!(windows) && path.starts_with('\\')) {
                ("/".to_string(), path, cfg!(windows))
            } else {
                (String::new(), path, cfg!(windows))
            };

        let mut segments: Vec<String> = Vec::new();
        let pieces = rest.split(|c: char| c == '/' || (backslash_separates && c == '\\'));
        for piece in pieces {
            match piece {
                "" | "." => {}
                ".." => {
                    if segments.last().is_some_and(|last| last != "..") {
                        segments.pop();
                    } else if root.is_empty() {
                        segments.push(piece.to_string());
                    }
                    // `..` above an absolute root stays at the root
                }
                _ => segments.push(piece.to_string()),
            }
        }

        Self { root, segments }
    }
}

/// Compute the path of `dest_dir` relative to `context_dir`
///
/// Returns `"."` when both name the same directory. Segments are joined with
/// the platform separator and never carry a trailing separator. With
/// `dashes`, separators and colons in the result are replaced by `-` to form
/// a single filesystem-safe token.
pub fn relative_path(context_dir: &Path, dest_dir: &Path, dashes: bool) -> Result<String, PathError> {
    relative_path_str(
        &context_dir.to_string_lossy(),
        &dest_dir.to_string_lossy(),
        dashes,
    )
}

/// [`relative_path`] over string paths
pub fn relative_path_str(context_dir: &str, dest_dir: &str, dashes: bool) -> Result<String, PathError> {
    let context = PathChunks::parse(context_dir);
    let dest = PathChunks::parse(dest_dir);

    if context.root != dest.root {
        return Err(PathError::DifferentRoots {
            context: context_dir.to_string(),
            dest: dest_dir.to_string(),
            context_root: context.root,
            dest_root: dest.root,
        });
    }

    let common = context
        .segments
        .iter()
        .zip(&dest.segments)
        .take_while(|(a, b)| a == b)
        .count();

    if common == context.segments.len() && common == dest.segments.len() {
        return Ok(".".to_string());
    }

    let parts: Vec<&str> = std::iter::repeat("..")
        .take(context.segments.len() - common)
        .chain(dest.segments[common..].iter().map(String::as_str))
        .collect();

    let joined = parts.join(&MAIN_SEPARATOR.to_string());
    if dashes {
        Ok(joined.replace(['/', '\\', ':'], "-"))
    } else {
        Ok(joined)
    }
}

/// Lexically normalize a path, removing `.` and resolving `..` where possible
///
/// Does not touch the filesystem, so symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let after_normal = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if after_normal {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Resolve `path` against `base_dir` unless it is already absolute, then normalize
pub fn absolutize(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base_dir.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sep(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_child_directory() {
        assert_eq!(relative_path_str("/root/x", "/root/x/y", false).unwrap(), "y");
    }

    #[test]
    fn test_parent_directory() {
        assert_eq!(relative_path_str("/root/x/y", "/root/x", false).unwrap(), "..");
    }

    #[test]
    fn test_same_directory_is_dot() {
        assert_eq!(relative_path_str("/root/x", "/root/x", false).unwrap(), ".");
        assert_eq!(relative_path_str("/root/x/", "/root/x", false).unwrap(), ".");
        assert_eq!(relative_path_str("/", "/", false).unwrap(), ".");
    }

    #[test]
    fn test_sibling_directory() {
        assert_eq!(
            relative_path_str("/ws/app/web", "/ws/lib/core", false).unwrap(),
            sep("../../lib/core")
        );
    }

    #[test]
    fn test_from_filesystem_root() {
        assert_eq!(relative_path_str("/", "/a/b", false).unwrap(), sep("a/b"));
    }

    #[test]
    fn test_different_drives_fail() {
        let err = relative_path_str(r"C:\a", r"D:\b", false).unwrap_err();
        assert!(matches!(err, PathError::DifferentRoots { .. }));
        assert!(err.to_string().contains("C:"));
    }

    #[test]
    fn test_drive_letters_compare_case_insensitively() {
        assert_eq!(relative_path_str(r"c:\a", r"C:\a\b", false).unwrap(), "b");
    }

    #[test]
    fn test_unc_and_posix_roots_differ() {
        assert!(relative_path_str(r"\\server\share\a", "/a", false).is_err());
    }

    #[test]
    fn test_dashes_flag_produces_single_token() {
        assert_eq!(
            relative_path_str("/ws", "/ws/modules/core", true).unwrap(),
            "modules-core"
        );
        assert_eq!(relative_path_str("/ws/a", "/ws/b", true).unwrap(), "..-b");
    }

    #[test]
    fn test_dot_segments_are_normalized() {
        assert_eq!(relative_path_str("/ws/./a", "/ws/b/../a/c", false).unwrap(), "c");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("/ws/./a/../b")), PathBuf::from("/ws/b"));
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_path(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(absolutize(Path::new("/ws"), Path::new("mod/../core")), PathBuf::from("/ws/core"));
        assert_eq!(absolutize(Path::new("/ws"), Path::new("/other")), PathBuf::from("/other"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Relative path from a directory to itself is always "."
        #[test]
        fn prop_relative_path_to_self_is_dot(segments in proptest::collection::vec("[a-z0-9_]{1,8}", 0..6)) {
            let dir = format!("/{}", segments.join("/"));
            prop_assert_eq!(relative_path_str(&dir, &dir, false).unwrap(), ".");
        }

        /// Joining the result back onto the context reaches the destination
        #[test]
        fn prop_relative_path_resolves_to_dest(
            context in proptest::collection::vec("[a-z]{1,4}", 0..5),
            dest in proptest::collection::vec("[a-z]{1,4}", 0..5),
        ) {
            let context_dir = PathBuf::from(format!("/{}", context.join("/")));
            let dest_dir = PathBuf::from(format!("/{}", dest.join("/")));
            let rel = relative_path(&context_dir, &dest_dir, false).unwrap();
            prop_assert!(!rel.ends_with(MAIN_SEPARATOR));
            prop_assert_eq!(normalize_path(&context_dir.join(rel)), normalize_path(&dest_dir));
        }
    }
}
