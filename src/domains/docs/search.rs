//! Substring search with line-context windows.
//!
//! Shared by both resolver variants: the embedded store searches the topic
//! table, the file-backed store searches the skill and readme documents. The
//! report is deterministic for identical inputs, which the tests rely on.

/// Maximum matches collected per document. Scanning stops once reached.
pub const MATCHES_PER_DOCUMENT: usize = 5;

/// One matched line with up to one line of context on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// 1-based line number of the matched line.
    pub line_number: usize,

    /// Previous line, trimmed, if the match is not the first line.
    pub before: Option<String>,

    /// The matched line, trimmed.
    pub line: String,

    /// Next line, trimmed, if the match is not the last line.
    pub after: Option<String>,
}

/// Scan one document for case-insensitive substring matches.
///
/// The whole-document containment test is the cheap gate; only documents that
/// pass it get the per-line scan. Collection stops at [`MATCHES_PER_DOCUMENT`]
/// and remaining lines are not scanned.
pub fn search_document(body: &str, term: &str) -> Vec<SearchMatch> {
    let needle = term.to_lowercase();
    if !body.to_lowercase().contains(&needle) {
        return Vec::new();
    }

    let lines: Vec<&str> = body.lines().collect();
    let mut matches = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if !line.to_lowercase().contains(&needle) {
            continue;
        }

        matches.push(SearchMatch {
            line_number: index + 1,
            before: index
                .checked_sub(1)
                .map(|i| lines[i].trim().to_string()),
            line: line.trim().to_string(),
            after: lines.get(index + 1).map(|l| l.trim().to_string()),
        });

        if matches.len() >= MATCHES_PER_DOCUMENT {
            break;
        }
    }

    matches
}

/// Render a match report over `(document key, matches)` pairs.
///
/// Documents with no matches are omitted. An empty result set renders the
/// canonical no-results text instead.
pub fn render_report(term: &str, results: &[(&str, Vec<SearchMatch>)]) -> String {
    let with_hits: Vec<_> = results.iter().filter(|(_, m)| !m.is_empty()).collect();

    if with_hits.is_empty() {
        return no_results(term);
    }

    let mut out = format!("# Search results for '{}'\n", term);

    for (key, matches) in with_hits {
        out.push_str(&format!("\n## {}\n", key));
        for m in matches {
            out.push_str(&format!("\nLine {}:\n", m.line_number));
            if let Some(before) = &m.before {
                out.push_str(&format!("      {}\n", before));
            }
            out.push_str(&format!("  >>  {}\n", m.line));
            if let Some(after) = &m.after {
                out.push_str(&format!("      {}\n", after));
            }
        }
    }

    out
}

/// The canonical no-results text.
pub fn no_results(term: &str) -> String {
    format!(
        "No matches for '{}'.\n\n\
         Try a broader term, use list_topics to see what is documented, or \
         fetch a full document with get_document.",
        term
    )
}
