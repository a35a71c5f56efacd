//! Match highlighting for display strings.
//!
//! [`highlight`] splits a string into runs that do and do not contain the
//! query, so a renderer can emphasise the matched parts. The query is escaped
//! before it is compiled, so `a.b` only ever matches the three literal
//! characters `a.b`.

use regex::RegexBuilder;
use serde::Serialize;
use tracing::warn;

/// A contiguous run of text, tagged as matched or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

impl HighlightSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        HighlightSegment {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        HighlightSegment {
            text: text.into(),
            matched: true,
        }
    }
}

/// Split `text` into matched and unmatched segments for `query`.
///
/// - A blank query yields the whole text as one unmatched segment.
/// - Matching is case-insensitive and non-overlapping, scanning left to right.
/// - Back-to-back matches are merged, so matched and unmatched segments
///   strictly alternate. No empty segment is produced unless `text` itself is
///   empty.
/// - Concatenating the segment texts always gives back `text`.
///
/// Case folding here is the regex engine's simple, per-character folding,
/// while the topic filter compares `to_lowercase` strings. The two agree for
/// ordinary text, but a character whose lowercase form is several code points
/// (`İ` becomes `i` plus U+0307) can let a topic through the filter on part
/// of that expansion without any segment of its title being marked. Callers
/// must not assume a filtered topic has a highlighted title.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    if query.trim().is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    let regex = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            warn!(query_len = query.len(), error = %e, "Could not compile highlight pattern");
            return vec![HighlightSegment::plain(text)];
        }
    };

    let mut segments: Vec<HighlightSegment> = Vec::new();
    let mut last_end = 0;

    for m in regex.find_iter(text) {
        // Zero-width matches cannot happen for a non-blank literal, but an
        // empty run would break the alternation guarantee.
        if m.start() == m.end() {
            continue;
        }

        if m.start() > last_end {
            segments.push(HighlightSegment::plain(&text[last_end..m.start()]));
        }

        match segments.last_mut() {
            Some(prev) if prev.matched => prev.text.push_str(m.as_str()),
            _ => segments.push(HighlightSegment::matched(m.as_str())),
        }

        last_end = m.end();
    }

    if last_end < text.len() || segments.is_empty() {
        segments.push(HighlightSegment::plain(&text[last_end..]));
    }

    segments
}
