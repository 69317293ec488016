//! The documentation store.
//!
//! `DocStore` is the single interface every tool talks to. It has two
//! variants: an embedded store over the compiled-in topic tables, and a
//! file-backed store reading a skill/readme pair under a configured root.
//! All lookup keys are trimmed and lower-cased before use, and every outcome
//! is a formatted string; "not found" is a normal reply, not a fault.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::core::config::{DocsConfig, DocsMode};

use super::content::{self, Category};
use super::error::DocsError;
use super::extract::{self, CodeBlock};
use super::search::{self, SearchMatch};
use super::source;

/// Skill document path, relative to the configured root.
const SKILL_FILE: &str = "SKILL.md";

/// Readme document path, relative to the configured root.
const README_FILE: &str = "README.md";

/// Documentation store shared by all tools and resources.
#[derive(Debug)]
pub enum DocStore {
    Embedded(EmbeddedDocs),
    Files(FileDocs),
}

impl DocStore {
    /// Build the store selected by the configuration.
    ///
    /// A missing or unusable root in files mode is one of the two genuine
    /// faults in the system and aborts startup.
    pub fn from_config(config: &DocsConfig) -> Result<Self, DocsError> {
        match config.mode {
            DocsMode::Embedded => {
                info!("Documentation store: embedded");
                Ok(Self::Embedded(EmbeddedDocs))
            }
            DocsMode::Files => {
                let root = config.root.clone().ok_or(DocsError::RootNotConfigured)?;
                let root = root
                    .canonicalize()
                    .map_err(|source| DocsError::RootUnavailable {
                        root: root.clone(),
                        source,
                    })?;
                if !root.is_dir() {
                    return Err(DocsError::RootNotADirectory { root });
                }
                info!("Documentation store: files rooted at {}", root.display());
                Ok(Self::Files(FileDocs::new(root)))
            }
        }
    }

    /// Short mode name for logging and server info.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Embedded(_) => "embedded",
            Self::Files(_) => "files",
        }
    }

    /// The configured root, when running file-backed.
    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::Embedded(_) => None,
            Self::Files(files) => Some(&files.root),
        }
    }

    /// Fetch a document by topic (embedded) or section (files) key.
    pub fn get_document(&self, key: Option<&str>) -> String {
        match self {
            Self::Embedded(docs) => docs.get_document(key),
            Self::Files(docs) => docs.get_document(key),
        }
    }

    /// Render the topic index.
    pub fn list_topics(&self) -> String {
        match self {
            Self::Embedded(docs) => docs.list_topics(),
            Self::Files(docs) => docs.list_topics(),
        }
    }

    /// Search every document for a term and render the match report.
    pub fn search(&self, term: &str) -> String {
        let term = term.trim();
        if term.is_empty() {
            return "Search term is empty. Provide a word or phrase to look for.".to_string();
        }
        match self {
            Self::Embedded(docs) => docs.search(term),
            Self::Files(docs) => docs.search(term),
        }
    }

    /// Fetch a code example for a feature key.
    pub fn get_example(&self, feature: &str) -> String {
        let feature = normalize(feature);
        match self {
            Self::Embedded(docs) => docs.get_example(&feature),
            Self::Files(docs) => docs.get_example(&feature),
        }
    }

    /// Read a source file below the root (files variant only).
    pub fn read_source(&self, path: &str) -> String {
        match self {
            Self::Embedded(_) => source_browsing_unavailable(),
            Self::Files(docs) => source::read_source(&docs.root, path),
        }
    }

    /// List a source directory below the root (files variant only).
    pub fn list_source(&self, dir: &str, extension: Option<&str>) -> String {
        match self {
            Self::Embedded(_) => source_browsing_unavailable(),
            Self::Files(docs) => source::list_source(&docs.root, dir, extension),
        }
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

fn source_browsing_unavailable() -> String {
    "Source browsing is only available when the server runs in files mode \
     (set MCP_DOCS_MODE=files and MCP_DOCS_ROOT)."
        .to_string()
}

// ============================================================================
// Embedded variant
// ============================================================================

/// Resolver over the compiled-in topic and example tables. Fully immutable.
#[derive(Debug)]
pub struct EmbeddedDocs;

impl EmbeddedDocs {
    fn get_document(&self, key: Option<&str>) -> String {
        let key = key.map(normalize).unwrap_or_else(|| "overview".to_string());

        match content::topic(&key) {
            Some(topic) => topic.body.to_string(),
            None => format!(
                "No documentation found for topic '{}'.\n\nValid topics: {}",
                key,
                content::sorted_topic_keys().join(", ")
            ),
        }
    }

    fn list_topics(&self) -> String {
        let mut out = String::from("# Documentation topics\n");

        for category in Category::all() {
            out.push_str(&format!("\n## {}\n", category.label()));
            for topic in content::TOPICS.iter().filter(|t| t.category == *category) {
                out.push_str(&format!("- {}: {}\n", topic.key, topic.summary));
            }
        }

        out.push_str("\nFetch any topic with get_document.\n");
        out
    }

    fn search(&self, term: &str) -> String {
        let results: Vec<(&str, Vec<SearchMatch>)> = content::TOPICS
            .iter()
            .map(|topic| (topic.key, search::search_document(topic.body, term)))
            .collect();
        search::render_report(term, &results)
    }

    fn get_example(&self, feature: &str) -> String {
        match content::example(feature) {
            Some(example) => format!("# Example: {}\n\n```csharp\n{}```\n", example.key, example.body),
            None => format!(
                "No example found for feature '{}'.\n\nValid features: {}",
                feature,
                content::sorted_example_keys().join(", ")
            ),
        }
    }
}

// ============================================================================
// File-backed variant
// ============================================================================

/// Resolver over a skill/readme pair below a fixed root directory.
///
/// Both files are read lazily on first access and memoized for the process
/// lifetime; concurrent first accessors observe the one published value and
/// the underlying read runs at most once per file.
#[derive(Debug)]
pub struct FileDocs {
    root: PathBuf,
    skill: OnceLock<Option<String>>,
    readme: OnceLock<Option<String>>,
}

impl FileDocs {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            skill: OnceLock::new(),
            readme: OnceLock::new(),
        }
    }

    fn skill_path(&self) -> PathBuf {
        self.root.join(SKILL_FILE)
    }

    fn readme_path(&self) -> PathBuf {
        self.root.join(README_FILE)
    }

    fn skill(&self) -> Option<&str> {
        self.skill
            .get_or_init(|| read_memoized(&self.skill_path()))
            .as_deref()
    }

    fn readme(&self) -> Option<&str> {
        self.readme
            .get_or_init(|| read_memoized(&self.readme_path()))
            .as_deref()
    }

    fn section_or_missing(&self, section: &str) -> String {
        let (content, path) = match section {
            "skill" => (self.skill(), self.skill_path()),
            _ => (self.readme(), self.readme_path()),
        };
        match content {
            Some(text) => text.to_string(),
            None => format!("file not found: {}", path.display()),
        }
    }

    fn get_document(&self, key: Option<&str>) -> String {
        let section = key.map(normalize).unwrap_or_else(|| "full".to_string());

        match section.as_str() {
            "full" => format!(
                "{}\n\n---\n\n{}",
                self.section_or_missing("skill"),
                self.section_or_missing("readme")
            ),
            "skill" | "readme" => self.section_or_missing(&section),
            other => format!(
                "No documentation section named '{}'.\n\nValid sections: full, readme, skill",
                other
            ),
        }
    }

    fn list_topics(&self) -> String {
        let mut out = String::from("# Documentation files\n\n");

        let mut bullets = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.root) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                let is_md = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("md"));
                if !path.is_file() || !is_md {
                    continue;
                }
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                bullets.push(format!(
                    "- {} ({:.1} KiB)",
                    entry.file_name().to_string_lossy(),
                    size as f64 / 1024.0
                ));
            }
        }
        bullets.sort_unstable();

        if bullets.is_empty() {
            out.push_str("(no markdown files under the documentation root)\n");
        } else {
            out.push_str(&bullets.join("\n"));
            out.push('\n');
        }

        out.push_str("\nFetch content with get_document (sections: full, skill, readme).\n");
        out
    }

    fn search(&self, term: &str) -> String {
        let corpus = [("skill", self.skill()), ("readme", self.readme())];

        let results: Vec<(&str, Vec<SearchMatch>)> = corpus
            .into_iter()
            .filter_map(|(key, text)| {
                text.map(|body| (key, search::search_document(body, term)))
            })
            .collect();
        search::render_report(term, &results)
    }

    fn get_example(&self, feature: &str) -> String {
        let Some(skill) = self.skill() else {
            return format!("file not found: {}", self.skill_path().display());
        };

        let marker = content::marker_for(feature);
        let blocks = extract::blocks_for_feature(skill, feature, marker);

        if blocks.is_empty() {
            return format!(
                "No examples found for '{}'.\n\nTry search to look for the term directly.",
                feature
            );
        }

        let mut out = format!("# Examples for '{}'\n", feature);
        for block in &blocks {
            out.push_str(&render_block(block));
        }
        out
    }
}

fn render_block(block: &CodeBlock) -> String {
    format!(
        "\n```{}\n{}```\n",
        block.language.as_deref().unwrap_or(""),
        block.body
    )
}

/// One-shot read backing the memo. Failures are logged and published as
/// `None`; callers render the not-found text with the attempted path.
fn read_memoized(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SKILL: &str = "# Skill\n\
        \n\
        Request handling guide.\n\
        \n\
        ```csharp\n\
        public class H : ICommandHandler<MyCommand> { }\n\
        ```\n\
        \n\
        ```csharp\n\
        public record MyRequest(string Argument) : IRequest<MyResponse>;\n\
        ```\n";

    const README: &str = "# Readme\n\nInstall the package.\n";

    fn embedded() -> DocStore {
        DocStore::Embedded(EmbeddedDocs)
    }

    fn files_fixture() -> (TempDir, DocStore) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("SKILL.md"), SKILL).unwrap();
        fs::write(dir.path().join("README.md"), README).unwrap();
        let store = DocStore::from_config(&DocsConfig {
            mode: DocsMode::Files,
            root: Some(dir.path().to_path_buf()),
        })
        .unwrap();
        (dir, store)
    }

    #[test]
    fn test_embedded_lookup_is_case_and_whitespace_insensitive() {
        let store = embedded();
        let canonical = store.get_document(Some("caching"));
        assert_eq!(store.get_document(Some("Caching")), canonical);
        assert_eq!(store.get_document(Some(" caching ")), canonical);
        assert_eq!(store.get_document(Some("CACHING")), canonical);
    }

    #[test]
    fn test_embedded_every_topic_resolves() {
        let store = embedded();
        for key in content::sorted_topic_keys() {
            let doc = store.get_document(Some(key));
            assert!(!doc.starts_with("No documentation found"), "topic {}", key);
        }
    }

    #[test]
    fn test_embedded_default_topic_is_overview() {
        let store = embedded();
        assert_eq!(store.get_document(None), store.get_document(Some("overview")));
    }

    #[test]
    fn test_embedded_unknown_topic_lists_sorted_keys() {
        let store = embedded();
        let reply = store.get_document(Some("wombat"));
        assert!(reply.contains("No documentation found for topic 'wombat'"));
        let keys = content::sorted_topic_keys();
        for key in &keys {
            assert!(reply.contains(key));
        }
        // Sorted order: "advanced" appears before "validation".
        let advanced = reply.find("advanced").unwrap();
        let validation = reply.find("validation").unwrap();
        assert!(advanced < validation);
    }

    #[test]
    fn test_embedded_list_topics_groups_by_category() {
        let listing = embedded().list_topics();
        assert!(listing.contains("## Core"));
        assert!(listing.contains("## Contract Types"));
        assert!(listing.contains("## Middleware & Extensions"));
        assert!(listing.contains("## Advanced"));
        assert!(listing.contains("- caching:"));
    }

    #[test]
    fn test_embedded_search_finds_canonical_request_line() {
        let report = embedded().search("IRequest");
        assert!(report.contains("## requests"));
        assert!(
            report.contains("public record MyRequest(string Argument) : IRequest<MyResponse>;")
        );
    }

    #[test]
    fn test_embedded_search_no_results() {
        let report = embedded().search("zzz_no_such_term_zzz");
        assert!(report.contains("No matches for 'zzz_no_such_term_zzz'"));
    }

    #[test]
    fn test_embedded_search_empty_term_is_guarded() {
        let report = embedded().search("   ");
        assert!(report.contains("Search term is empty"));
    }

    #[test]
    fn test_embedded_example_lookup_and_unknown_key() {
        let store = embedded();
        let example = store.get_example("Request");
        assert!(example.contains("IRequestHandler"));
        assert!(example.contains("```csharp"));

        let unknown = store.get_example("teleport");
        assert!(unknown.contains("No example found for feature 'teleport'"));
        assert!(unknown.contains("caching, command, event, http, middleware, request, stream, validation"));
    }

    #[test]
    fn test_embedded_has_no_root_and_declines_source_browsing() {
        let store = embedded();
        assert!(store.root().is_none());
        assert!(store.read_source("x.cs").contains("files mode"));
        assert!(store.list_source(".", None).contains("files mode"));
    }

    #[test]
    fn test_files_sections() {
        let (_dir, store) = files_fixture();

        assert_eq!(store.get_document(Some("skill")), SKILL);
        assert_eq!(store.get_document(Some("readme")), README);

        let full = store.get_document(None);
        assert!(full.contains("Request handling guide."));
        assert!(full.contains("\n\n---\n\n"));
        assert!(full.contains("Install the package."));

        let unknown = store.get_document(Some("appendix"));
        assert!(unknown.contains("Valid sections: full, readme, skill"));
    }

    #[test]
    fn test_files_missing_backing_file_names_absolute_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), README).unwrap();
        let store = DocStore::from_config(&DocsConfig {
            mode: DocsMode::Files,
            root: Some(dir.path().to_path_buf()),
        })
        .unwrap();

        let reply = store.get_document(Some("skill"));
        assert!(reply.starts_with("file not found: "));
        assert!(reply.contains("SKILL.md"));
        assert!(Path::new(reply.trim_start_matches("file not found: ")).is_absolute());
    }

    #[test]
    fn test_files_list_topics_reports_markdown_files_with_sizes() {
        let (_dir, store) = files_fixture();
        let listing = store.list_topics();
        assert!(listing.contains("- README.md ("));
        assert!(listing.contains("- SKILL.md ("));
        assert!(listing.contains("KiB)"));
    }

    #[test]
    fn test_files_list_topics_is_non_recursive() {
        let (dir, store) = files_fixture();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/inner.md"), "# inner\n").unwrap();

        let listing = store.list_topics();
        assert!(!listing.contains("inner.md"));
    }

    #[test]
    fn test_files_search_covers_skill_and_readme() {
        let (_dir, store) = files_fixture();
        let report = store.search("install");
        assert!(report.contains("## readme"));

        let report = store.search("guide");
        assert!(report.contains("## skill"));
    }

    #[test]
    fn test_files_example_extraction_by_marker() {
        let (_dir, store) = files_fixture();

        let command = store.get_example("command");
        assert!(command.contains("ICommandHandler<MyCommand>"));

        let stream = store.get_example("stream");
        assert!(stream.contains("No examples found for 'stream'"));
    }

    #[test]
    fn test_files_example_unknown_key_uses_raw_marker() {
        let (_dir, store) = files_fixture();
        // 'myrequest' is not a known feature; the raw key still matches the
        // second fenced block case-insensitively.
        let reply = store.get_example("MyRequest");
        assert!(reply.contains("public record MyRequest"));
    }

    #[test]
    fn test_files_source_browsing_round_trip() {
        let (dir, store) = files_fixture();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/A.cs"), "class A {}\n").unwrap();

        assert!(store.read_source("src/A.cs").contains("class A {}"));
        assert!(store.list_source(".", Some("cs")).contains("A.cs"));
        assert!(
            store
                .read_source("../outside.cs")
                .contains("within the documentation repository")
        );
    }

    #[test]
    fn test_from_config_faults() {
        let err = DocStore::from_config(&DocsConfig {
            mode: DocsMode::Files,
            root: None,
        })
        .unwrap_err();
        assert!(matches!(err, DocsError::RootNotConfigured));

        let err = DocStore::from_config(&DocsConfig {
            mode: DocsMode::Files,
            root: Some(PathBuf::from("/nonexistent/docs/root")),
        })
        .unwrap_err();
        assert!(matches!(err, DocsError::RootUnavailable { .. }));
    }

    #[test]
    fn test_memoized_reads_survive_file_deletion() {
        let (dir, store) = files_fixture();

        // Prime the memo, then remove the backing file; the published value
        // must keep being served.
        let before = store.get_document(Some("skill"));
        fs::remove_file(dir.path().join("SKILL.md")).unwrap();
        let after = store.get_document(Some("skill"));
        assert_eq!(before, after);
    }
}
