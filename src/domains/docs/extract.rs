//! Fenced code block extraction.
//!
//! The file-backed resolver mines code examples out of the skill document by
//! scanning its triple-backtick fences for a feature's marker token. Parsing
//! is an explicit two-state toggle so the "unterminated fence is discarded"
//! rule stays visible and testable.

/// Maximum blocks returned per feature extraction.
pub const BLOCKS_PER_FEATURE: usize = 3;

const FENCE: &str = "```";

/// One extracted fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag captured from the opening fence, if any.
    pub language: Option<String>,

    /// Block body; every content line keeps its trailing newline.
    pub body: String,
}

enum FenceState {
    Outside,
    Inside {
        language: Option<String>,
        body: String,
    },
}

/// Extract every complete fenced block from `text`, in document order.
///
/// A line is a fence delimiter if, after stripping leading whitespace, it
/// starts with the triple-backtick token. The opening delimiter's remainder is
/// captured as an optional language tag. A fence still open at end of input
/// yields no block.
pub fn extract_fenced_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut state = FenceState::Outside;

    for line in text.lines() {
        if let Some(rest) = line.trim_start().strip_prefix(FENCE) {
            state = match state {
                FenceState::Outside => {
                    let tag = rest.trim();
                    FenceState::Inside {
                        language: (!tag.is_empty()).then(|| tag.to_string()),
                        body: String::new(),
                    }
                }
                FenceState::Inside { language, body } => {
                    blocks.push(CodeBlock { language, body });
                    FenceState::Outside
                }
            };
            continue;
        }

        if let FenceState::Inside { body, .. } = &mut state {
            body.push_str(line);
            body.push('\n');
        }
    }

    blocks
}

/// Collect blocks relevant to a feature: any block whose body contains the
/// marker token or the raw feature key, case-insensitively, in document
/// order, capped at [`BLOCKS_PER_FEATURE`].
pub fn blocks_for_feature(text: &str, feature: &str, marker: &str) -> Vec<CodeBlock> {
    let marker_lc = marker.to_lowercase();
    let feature_lc = feature.to_lowercase();

    extract_fenced_blocks(text)
        .into_iter()
        .filter(|block| {
            let body = block.body.to_lowercase();
            body.contains(&marker_lc) || body.contains(&feature_lc)
        })
        .take(BLOCKS_PER_FEATURE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_with_language_tag() {
        let text = "text\n```csharp\nICommandHandler<MyCommand>\n```\nmore text";
        let blocks = extract_fenced_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language.as_deref(), Some("csharp"));
        assert_eq!(blocks[0].body, "ICommandHandler<MyCommand>\n");
    }

    #[test]
    fn test_marker_selects_blocks() {
        let text = "text\n```csharp\nICommandHandler<MyCommand>\n```\nmore text";
        let hits = blocks_for_feature(text, "command", "ICommandHandler");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].body, "ICommandHandler<MyCommand>\n");

        let misses = blocks_for_feature(text, "stream", "IStreamRequestHandler");
        assert!(misses.is_empty());
    }

    #[test]
    fn test_unterminated_fence_is_discarded() {
        let text = "```csharp\nvar x = 1;\n```\n```\nleft open";
        let blocks = extract_fenced_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "var x = 1;\n");
    }

    #[test]
    fn test_indented_fences_toggle() {
        let text = "  ```js\n  let a = 1;\n  ```\n";
        let blocks = extract_fenced_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language.as_deref(), Some("js"));
        assert_eq!(blocks[0].body, "  let a = 1;\n");
    }

    #[test]
    fn test_untagged_fence_has_no_language() {
        let blocks = extract_fenced_blocks("```\nplain\n```\n");
        assert_eq!(blocks[0].language, None);
    }

    #[test]
    fn test_extraction_cap() {
        let mut text = String::new();
        for i in 0..5 {
            text.push_str(&format!("```\nmarker block {}\n```\n", i));
        }
        let hits = blocks_for_feature(&text, "marker", "marker");
        assert_eq!(hits.len(), BLOCKS_PER_FEATURE);
        assert_eq!(hits[0].body, "marker block 0\n");
    }

    #[test]
    fn test_raw_feature_key_matches_case_insensitively() {
        let text = "```\nuses the Batching helper\n```\n";
        let hits = blocks_for_feature(text, "BATCHING", "NoSuchMarker");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_blocks_keep_document_order() {
        let text = "```\nfirst needle\n```\nprose\n```\nsecond needle\n```\n";
        let hits = blocks_for_feature(text, "needle", "needle");
        assert_eq!(hits.len(), 2);
        assert!(hits[0].body.contains("first"));
        assert!(hits[1].body.contains("second"));
    }
}
