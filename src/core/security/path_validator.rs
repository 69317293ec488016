use std::io;
use std::path::{Component, Path, PathBuf};

/// Errors that can occur during path containment checks.
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("path must be within the documentation repository (requested '{requested}')")]
    OutsideRoot { requested: String },

    #[error("documentation root '{root}' is not usable: {error}")]
    RootUnavailable { root: PathBuf, error: io::Error },
}

/// Resolve a caller-supplied relative path against the configured root,
/// guaranteeing the result stays at or below the root.
///
/// The check runs before any filesystem access on the target:
///
/// 1. The root is canonicalized (it must exist; a failure here is a genuine
///    configuration fault).
/// 2. The joined path is normalized lexically, resolving `.` and `..`
///    components. An absolute input replaces the root on join and therefore
///    fails the prefix test unless it already points inside the root.
/// 3. Containment is a component-wise prefix test via [`Path::starts_with`],
///    never a string comparison: `/root2` must not pass for root `/root`.
/// 4. If the target exists it is canonicalized and re-checked, so a symlink
///    pointing outside the root is rejected as well.
///
/// The returned path is canonical when the target exists, lexically
/// normalized otherwise (callers turn missing targets into not-found text).
pub fn resolve_within_root(root: &Path, requested: &str) -> Result<PathBuf, PathSecurityError> {
    let canonical_root = root
        .canonicalize()
        .map_err(|error| PathSecurityError::RootUnavailable {
            root: root.to_path_buf(),
            error,
        })?;

    let candidate = canonical_root.join(requested.trim());

    let mut normalized = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }

    if !normalized.starts_with(&canonical_root) {
        return Err(PathSecurityError::OutsideRoot {
            requested: requested.to_string(),
        });
    }

    if normalized.exists() {
        let canonical =
            normalized
                .canonicalize()
                .map_err(|error| PathSecurityError::RootUnavailable {
                    root: canonical_root.clone(),
                    error,
                })?;
        if !canonical.starts_with(&canonical_root) {
            return Err(PathSecurityError::OutsideRoot {
                requested: requested.to_string(),
            });
        }
        return Ok(canonical);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plain_relative_path_resolves() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("doc.md"), "content").unwrap();

        let resolved = resolve_within_root(root.path(), "doc.md").unwrap();
        assert!(resolved.ends_with("doc.md"));
        assert!(resolved.is_file());
    }

    #[test]
    fn test_missing_target_still_resolves_inside_root() {
        let root = TempDir::new().unwrap();
        let resolved = resolve_within_root(root.path(), "nope/missing.md").unwrap();
        assert!(resolved.starts_with(root.path().canonicalize().unwrap()));
        assert!(!resolved.exists());
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let root = TempDir::new().unwrap();
        let result = resolve_within_root(root.path(), "../../etc/passwd");
        assert!(matches!(result, Err(PathSecurityError::OutsideRoot { .. })));
    }

    #[test]
    fn test_interior_dotdot_is_allowed_when_it_stays_inside() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("doc.md"), "content").unwrap();

        let resolved = resolve_within_root(root.path(), "sub/../doc.md").unwrap();
        assert!(resolved.ends_with("doc.md"));
    }

    #[test]
    fn test_absolute_input_rejected() {
        let root = TempDir::new().unwrap();
        let result = resolve_within_root(root.path(), "/etc/passwd");
        assert!(matches!(result, Err(PathSecurityError::OutsideRoot { .. })));
    }

    #[test]
    fn test_sibling_directory_name_prefix_rejected() {
        // /parent/root2 must not pass containment for root /parent/root.
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("root");
        let sibling = parent.path().join("root2");
        fs::create_dir(&root).unwrap();
        fs::create_dir(&sibling).unwrap();
        fs::write(sibling.join("secret.txt"), "secret").unwrap();

        let result = resolve_within_root(&root, "../root2/secret.txt");
        assert!(matches!(result, Err(PathSecurityError::OutsideRoot { .. })));
    }

    #[test]
    fn test_missing_root_is_a_fault() {
        let result = resolve_within_root(Path::new("/nonexistent/root/dir"), "doc.md");
        assert!(matches!(
            result,
            Err(PathSecurityError::RootUnavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_rejected() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("target.txt");
        fs::write(&target, "outside").unwrap();
        symlink(&target, root.path().join("link.txt")).unwrap();

        let result = resolve_within_root(root.path(), "link.txt");
        assert!(matches!(result, Err(PathSecurityError::OutsideRoot { .. })));
    }

    #[test]
    fn test_rejection_message_names_the_request_not_the_resolved_path() {
        let root = TempDir::new().unwrap();
        let err = resolve_within_root(root.path(), "../../etc/passwd").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("within the documentation repository"));
        assert!(message.contains("../../etc/passwd"));
        assert!(!message.contains(&root.path().display().to_string()));
    }
}
