//! Topic search.
//!
//! Filtering is a case-insensitive substring test against three fields, tried
//! in order:
//!
//! 1. the title
//! 2. each keyword on its own
//! 3. the explanation, after [`strip_markup`](crate::markup::strip_markup)
//!
//! A topic is kept if any field contains the query. Results keep catalog
//! order; there is no ranking. The query is always a literal, so characters
//! like `.` or `(` have no special meaning.
//!
//! A query that is empty after trimming matches everything. Otherwise the
//! untrimmed query is what gets searched for, so `" state"` does not match
//! `"useState"`.

use crate::markup::strip_markup;
use crate::types::Topic;
use serde::Serialize;
use std::fmt;

/// Which field of a topic satisfied the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Keyword,
    Explanation,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Keyword => "keyword",
            SearchField::Explanation => "explanation",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prepared search query.
///
/// Holds the lowercased pattern so it is computed once per keystroke rather
/// than once per field.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    pattern_lower: String,
}

impl SearchQuery {
    /// Prepare a query from user input.
    ///
    /// # Example
    /// ```
    /// use primer_core::{SearchQuery, Topic};
    /// let query = SearchQuery::new("REACT");
    /// assert!(query.matches(&Topic::new("intro", "Introduction to React")));
    /// ```
    pub fn new(input: &str) -> Self {
        SearchQuery {
            raw: input.to_string(),
            pattern_lower: input.to_lowercase(),
        }
    }

    /// The query exactly as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check if this query would match everything (blank input)
    pub fn matches_all(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Find the first field, in search order, that contains the query.
    ///
    /// Returns `None` both for non-matching topics and for blank queries,
    /// since a blank query is not matched against any field.
    pub fn matched_field(&self, topic: &Topic) -> Option<SearchField> {
        if self.matches_all() {
            return None;
        }

        if self.contained_in(&topic.title) {
            return Some(SearchField::Title);
        }

        if topic.keywords.iter().any(|k| self.contained_in(k)) {
            return Some(SearchField::Keyword);
        }

        if self.contained_in(&strip_markup(&topic.explanation)) {
            return Some(SearchField::Explanation);
        }

        None
    }

    /// Check if a topic passes this filter.
    pub fn matches(&self, topic: &Topic) -> bool {
        self.matches_all() || self.matched_field(topic).is_some()
    }

    fn contained_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.pattern_lower)
    }
}

/// A topic that passed the filter, with the field that let it through.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult<'a> {
    pub topic: &'a Topic,

    /// `None` when the query was blank and every topic passes
    pub field: Option<SearchField>,
}

/// Filter `topics` by `query`, preserving order.
///
/// A blank query returns every topic.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<&'a Topic> {
    let query = SearchQuery::new(query);
    topics.iter().filter(|t| query.matches(t)).collect()
}

/// Like [`filter_topics`], but also reports which field matched.
pub fn search_topics<'a>(topics: &'a [Topic], query: &SearchQuery) -> Vec<SearchResult<'a>> {
    if query.matches_all() {
        return topics
            .iter()
            .map(|topic| SearchResult { topic, field: None })
            .collect();
    }

    topics
        .iter()
        .filter_map(|topic| {
            query
                .matched_field(topic)
                .map(|field| SearchResult {
                    topic,
                    field: Some(field),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_topics() -> Vec<Topic> {
        vec![
            Topic::new("intro", "Introduction to React")
                .with_explanation(
                    "<p>React is a JavaScript library for building user interfaces.</p>",
                )
                .with_keywords(["react", "introduction", "javascript library", "ui"]),
            Topic::new("event-handling", "Event Handling")
                .with_explanation("<p>Respond to clicks with <code>onClick</code>.</p>")
                .with_keywords(["events", "onClick", "onChange", "user interaction"]),
            Topic::new("lists-keys", "Lists and Keys")
                .with_explanation("<p>Render collections with <code>map()</code>.</p>")
                .with_keywords(["lists", "keys", "array rendering"]),
        ]
    }

    fn ids(topics: &[&Topic]) -> Vec<String> {
        topics.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let topics = make_topics();
        for query in ["", "   ", "\t\n"] {
            let result = filter_topics(&topics, query);
            assert_eq!(ids(&result), vec!["intro", "event-handling", "lists-keys"]);
        }
    }

    #[test]
    fn test_empty_topics() {
        assert!(filter_topics(&[], "react").is_empty());
        assert!(filter_topics(&[], "").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let topics = make_topics();
        let upper = filter_topics(&topics, "REACT");
        let lower = filter_topics(&topics, "react");
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), vec!["intro"]);
    }

    #[test]
    fn test_keyword_scenario() {
        let topics: Vec<Topic> = make_topics().into_iter().take(2).collect();

        assert_eq!(ids(&filter_topics(&topics, "ui")), vec!["intro"]);
        assert_eq!(
            ids(&filter_topics(&topics, "onclick")),
            vec!["event-handling"]
        );
    }

    #[test]
    fn test_order_preserved() {
        let topics = make_topics();
        // Matches the first via explanation and the last via title
        let result = filter_topics(&topics, "s a");
        assert_eq!(ids(&result), vec!["intro", "lists-keys"]);
    }

    #[test]
    fn test_explanation_match_ignores_markup() {
        let topics = make_topics();
        // "code" only appears inside tags
        assert!(filter_topics(&topics, "code").is_empty());
        assert!(filter_topics(&topics, "<p>").is_empty());
        assert_eq!(ids(&filter_topics(&topics, "map()")), vec!["lists-keys"]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let topics = make_topics();
        assert!(filter_topics(&topics, "r.act").is_empty());
        assert!(filter_topics(&topics, ".*").is_empty());
        assert_eq!(ids(&filter_topics(&topics, "()")), vec!["lists-keys"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let topics = make_topics();
        assert!(filter_topics(&topics, "kubernetes").is_empty());
    }

    #[test]
    fn test_untrimmed_query_used_for_containment() {
        let topics = make_topics();
        assert_eq!(ids(&filter_topics(&topics, "event ")), vec!["event-handling"]);
        assert!(filter_topics(&topics, " keysx").is_empty());
    }

    #[test]
    fn test_matched_field_order() {
        let topics = make_topics();
        let query = SearchQuery::new("react");
        assert_eq!(query.matched_field(&topics[0]), Some(SearchField::Title));

        let query = SearchQuery::new("ui");
        assert_eq!(query.matched_field(&topics[0]), Some(SearchField::Keyword));

        let query = SearchQuery::new("respond");
        assert_eq!(
            query.matched_field(&topics[1]),
            Some(SearchField::Explanation)
        );

        let query = SearchQuery::new("");
        assert_eq!(query.matched_field(&topics[1]), None);
        assert!(query.matches(&topics[1]));
    }

    #[test]
    fn test_search_topics_reports_fields() {
        let topics = make_topics();
        let results = search_topics(&topics, &SearchQuery::new("on"));
        let summary: Vec<(&str, Option<SearchField>)> = results
            .iter()
            .map(|r| (r.topic.id.as_str(), r.field))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("intro", Some(SearchField::Title)),
                ("event-handling", Some(SearchField::Keyword)),
                ("lists-keys", Some(SearchField::Explanation)),
            ]
        );

        let all = search_topics(&topics, &SearchQuery::new(" "));
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|r| r.field.is_none()));
    }
}
