//! Source-tree browser for the file-backed resolver.
//!
//! Scoped reads and listings over the documentation repository. Every
//! operation resolves its path through the containment check first; missing
//! targets become suggestion-bearing text, never faults.

use std::fs;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::core::security::resolve_within_root;

/// Maximum file entries returned by a listing.
pub const LIST_FILES_CAP: usize = 100;

/// Maximum fuzzy filename suggestions for a missing file.
pub const FUZZY_SUGGESTION_CAP: usize = 5;

/// Read one file below the root, wrapped in a fenced block tagged with the
/// file's extension. A missing file falls back to listing sibling files whose
/// name contains the requested stem.
pub fn read_source(root: &Path, requested: &str) -> String {
    let resolved = match resolve_within_root(root, requested) {
        Ok(p) => p,
        Err(e) => return e.to_string(),
    };

    if resolved.is_file() {
        return match fs::read_to_string(&resolved) {
            Ok(content) => {
                let tag = resolved
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("text");
                let newline = if content.ends_with('\n') { "" } else { "\n" };
                format!("```{}\n{}{}```", tag, content, newline)
            }
            Err(e) => {
                warn!("Failed to read {}: {}", resolved.display(), e);
                format!("Could not read file '{}': {}", requested, e)
            }
        };
    }

    match sibling_suggestions(&resolved) {
        suggestions if suggestions.is_empty() => format!("File not found: {}", requested),
        suggestions => format!(
            "File not found: {}\n\nClose matches in the same directory:\n{}",
            requested,
            suggestions
                .iter()
                .map(|name| format!("- {}", name))
                .collect::<Vec<_>>()
                .join("\n")
        ),
    }
}

/// List one directory below the root: immediate subdirectories, then files
/// matching the optional extension filter, recursively, capped at
/// [`LIST_FILES_CAP`] entries in lexicographic path order.
pub fn list_source(root: &Path, requested: &str, extension: Option<&str>) -> String {
    let resolved = match resolve_within_root(root, requested) {
        Ok(p) => p,
        Err(e) => return e.to_string(),
    };

    if !resolved.is_dir() {
        return format!(
            "Directory not found: {}\n\nTop-level directories under the documentation root:\n{}",
            requested,
            immediate_subdirs(root)
                .iter()
                .map(|name| format!("- {}/", name))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    let filter = extension.map(|e| e.trim_start_matches('.').to_lowercase());

    let mut files: Vec<String> = WalkDir::new(&resolved)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| match &filter {
            Some(ext) => entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
            None => true,
        })
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(&resolved)
                .ok()
                .map(|rel| rel.display().to_string())
        })
        .collect();
    files.sort_unstable();

    let truncated = files.len() > LIST_FILES_CAP;
    files.truncate(LIST_FILES_CAP);

    let subdirs = immediate_subdirs(&resolved);

    let mut out = format!("Contents of {}:\n", display_dir(requested));

    out.push_str("\nDirectories:\n");
    if subdirs.is_empty() {
        out.push_str("(none)\n");
    } else {
        for dir in &subdirs {
            out.push_str(&format!("- {}/\n", dir));
        }
    }

    match &filter {
        Some(ext) => out.push_str(&format!("\nFiles (.{}):\n", ext)),
        None => out.push_str("\nFiles:\n"),
    }
    if files.is_empty() {
        out.push_str("(none)\n");
    } else {
        for file in &files {
            out.push_str(&format!("- {}\n", file));
        }
    }

    if truncated {
        out.push_str(&format!("\nListing truncated at {} files.\n", LIST_FILES_CAP));
    }

    out
}

/// Immediate subdirectories of `dir`, sorted by name. Unreadable directories
/// yield an empty list rather than a fault.
fn immediate_subdirs(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut dirs: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    dirs.sort_unstable();
    dirs
}

/// Sibling files whose name contains the missing file's stem (case-sensitive
/// substring), sorted, capped at [`FUZZY_SUGGESTION_CAP`].
fn sibling_suggestions(missing: &Path) -> Vec<String> {
    let Some(stem) = missing.file_stem().and_then(|s| s.to_str()) else {
        return Vec::new();
    };
    let Some(parent) = missing.parent() else {
        return Vec::new();
    };
    let Ok(entries) = fs::read_dir(parent) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains(stem))
        .collect();
    names.sort_unstable();
    names.truncate(FUZZY_SUGGESTION_CAP);
    names
}

fn display_dir(requested: &str) -> &str {
    let trimmed = requested.trim();
    if trimmed.is_empty() || trimmed == "." {
        "the documentation root"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("src")).unwrap();
        fs::create_dir(root.path().join("docs")).unwrap();
        fs::write(root.path().join("src/Mediator.cs"), "class Mediator {}\n").unwrap();
        fs::write(root.path().join("src/MediatorContext.cs"), "class Ctx {}\n").unwrap();
        fs::write(root.path().join("docs/notes.md"), "# notes\n").unwrap();
        root
    }

    #[test]
    fn test_read_wraps_content_in_tagged_fence() {
        let root = fixture();
        let out = read_source(root.path(), "src/Mediator.cs");
        assert!(out.starts_with("```cs\n"));
        assert!(out.contains("class Mediator {}"));
        assert!(out.ends_with("```"));
    }

    #[test]
    fn test_read_missing_file_suggests_siblings() {
        let root = fixture();
        let out = read_source(root.path(), "src/Mediator.txt");
        assert!(out.contains("File not found: src/Mediator.txt"));
        assert!(out.contains("- Mediator.cs"));
        assert!(out.contains("- MediatorContext.cs"));
    }

    #[test]
    fn test_read_missing_file_without_siblings_is_plain_not_found() {
        let root = fixture();
        let out = read_source(root.path(), "src/Unrelated.cs");
        assert!(out.contains("File not found: src/Unrelated.cs"));
        assert!(!out.contains("Close matches"));
    }

    #[test]
    fn test_fuzzy_suggestions_are_capped() {
        let root = TempDir::new().unwrap();
        for i in 0..8 {
            fs::write(root.path().join(format!("Handler{}.cs", i)), "x").unwrap();
        }
        let out = read_source(root.path(), "Handler.txt");
        let count = out.matches("- Handler").count();
        assert_eq!(count, FUZZY_SUGGESTION_CAP);
    }

    #[test]
    fn test_read_rejects_escape_before_touching_the_file() {
        let root = fixture();
        let out = read_source(root.path(), "../../etc/passwd");
        assert!(out.contains("within the documentation repository"));
        assert!(!out.contains("root:"));
    }

    #[test]
    fn test_list_shows_dirs_and_filtered_files() {
        let root = fixture();
        let out = list_source(root.path(), ".", Some(".cs"));
        assert!(out.contains("- docs/"));
        assert!(out.contains("- src/"));
        assert!(out.contains("Files (.cs):"));
        assert!(out.contains("Mediator.cs"));
        assert!(!out.contains("notes.md"));
    }

    #[test]
    fn test_list_without_filter_includes_everything() {
        let root = fixture();
        let out = list_source(root.path(), "docs", None);
        assert!(out.contains("notes.md"));
    }

    #[test]
    fn test_list_missing_dir_offers_root_subdirs() {
        let root = fixture();
        let out = list_source(root.path(), "nonexistent", None);
        assert!(out.contains("Directory not found: nonexistent"));
        assert!(out.contains("- docs/"));
        assert!(out.contains("- src/"));
    }

    #[test]
    fn test_list_rejects_escape() {
        let root = fixture();
        let out = list_source(root.path(), "../..", None);
        assert!(out.contains("within the documentation repository"));
    }

    #[test]
    fn test_list_caps_at_one_hundred_files_lexicographically() {
        let root = TempDir::new().unwrap();
        for i in 0..150 {
            fs::write(root.path().join(format!("file{:03}.cs", i)), "x").unwrap();
        }

        let out = list_source(root.path(), ".", Some("cs"));
        assert_eq!(out.matches("- file").count(), LIST_FILES_CAP);
        assert!(out.contains("file000.cs"));
        assert!(out.contains("file099.cs"));
        assert!(!out.contains("file100.cs"));
        assert!(out.contains("Listing truncated at 100 files."));
    }

    #[test]
    fn test_list_under_cap_has_no_truncation_notice() {
        let root = fixture();
        let out = list_source(root.path(), ".", None);
        assert!(!out.contains("truncated"));
    }
}
