//! The in-memory topic index.
//!
//! `TopicIndex` is the ordered, read-only list of topics the rest of the
//! system works from. It is built once from a catalog, validated on the way
//! in, and never mutated afterwards. Search results and route lookups borrow
//! from it; nothing derived from it is cached, since the list is small and
//! every query change recomputes the filter anyway.

use crate::error::{PrimerError, Result};
use crate::route::{self, Route};
use crate::search::{self, SearchQuery, SearchResult};
use crate::types::Topic;
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordered, immutable collection of topics.
///
/// ## Example
///
/// ```rust
/// use primer_core::{Quiz, QuizOption, Topic, TopicIndex};
///
/// let quiz = Quiz {
///     question: "What is React primarily used for?".to_string(),
///     options: vec![QuizOption::new("a", "Building user interfaces")],
///     correct_answer_id: "a".to_string(),
///     explanation: None,
/// };
/// let index = TopicIndex::new(
///     "React Learning Hub",
///     vec![Topic::new("intro", "Introduction to React").with_quiz(quiz)],
/// )
/// .unwrap();
///
/// assert_eq!(index.search("react").len(), 1);
/// assert!(index.resolve(Some("intro")).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TopicIndex {
    /// Catalog display title
    title: String,

    /// All topics, in catalog order
    topics: Vec<Topic>,
}

impl TopicIndex {
    /// Build an index, checking the topic invariants.
    ///
    /// Fails if an id is empty or repeated, a keyword is empty, or a quiz's
    /// correct answer is not one of its options.
    pub fn new(title: impl Into<String>, topics: Vec<Topic>) -> Result<Self> {
        validate(&topics)?;

        let title = title.into();
        info!(title = %title, topics = topics.len(), "Topic index loaded");

        Ok(TopicIndex { title, topics })
    }

    /// The catalog title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// All topics in catalog order
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Topic> {
        self.topics.iter()
    }

    /// Position of a topic in catalog order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.id == id)
    }

    /// Topics matching `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Topic> {
        let results = search::filter_topics(&self.topics, query);
        debug!(query = %query, results = results.len(), "Search");
        results
    }

    /// Topics matching `query`, each with the field that matched.
    pub fn search_with_fields(&self, query: &SearchQuery) -> Vec<SearchResult<'_>> {
        search::search_topics(&self.topics, query)
    }

    /// Resolve a route id to a topic. `None` means "not found".
    pub fn resolve(&self, route_id: Option<&str>) -> Option<&Topic> {
        route::resolve(&self.topics, route_id)
    }

    /// Resolve a parsed route. The landing route resolves to nothing.
    pub fn resolve_route(&self, route: &Route) -> Option<&Topic> {
        self.resolve(route.topic_id())
    }

    /// The topic shown on the landing view, if the catalog has it.
    pub fn landing_topic(&self, id: &str) -> Option<&Topic> {
        self.resolve(Some(id))
    }
}

impl<'a> IntoIterator for &'a TopicIndex {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

fn validate(topics: &[Topic]) -> Result<()> {
    let mut seen = HashSet::with_capacity(topics.len());

    for topic in topics {
        if topic.id.is_empty() {
            return Err(PrimerError::invalid_catalog(format!(
                "topic `{}` has an empty id",
                topic.title
            )));
        }

        if !seen.insert(topic.id.as_str()) {
            return Err(PrimerError::invalid_catalog(format!(
                "duplicate topic id `{}`",
                topic.id
            )));
        }

        if topic.keywords.iter().any(|k| k.is_empty()) {
            return Err(PrimerError::invalid_catalog(format!(
                "topic `{}` has an empty keyword",
                topic.id
            )));
        }

        let quiz = &topic.quiz;
        let mut option_ids = HashSet::with_capacity(quiz.options.len());
        for option in &quiz.options {
            if !option_ids.insert(option.id.to_ascii_lowercase()) {
                return Err(PrimerError::invalid_catalog(format!(
                    "topic `{}` has duplicate quiz option `{}`",
                    topic.id, option.id
                )));
            }
        }

        if quiz.correct_option().is_none() {
            return Err(PrimerError::invalid_catalog(format!(
                "topic `{}` quiz answer `{}` is not one of its options",
                topic.id, quiz.correct_answer_id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Quiz, QuizOption};

    fn make_quiz() -> Quiz {
        Quiz {
            question: "Pick one".to_string(),
            options: vec![QuizOption::new("a", "First"), QuizOption::new("b", "Second")],
            correct_answer_id: "a".to_string(),
            explanation: None,
        }
    }

    fn make_topics() -> Vec<Topic> {
        vec![
            Topic::new("intro", "Introduction to React")
                .with_keywords(["react", "ui"])
                .with_quiz(make_quiz()),
            Topic::new("event-handling", "Event Handling")
                .with_keywords(["onClick"])
                .with_quiz(make_quiz()),
            Topic::new("lists-keys", "Lists and Keys").with_quiz(make_quiz()),
        ]
    }

    #[test]
    fn test_new_and_accessors() {
        let index = TopicIndex::new("Hub", make_topics()).unwrap();
        assert_eq!(index.title(), "Hub");
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
        assert_eq!(index.position("lists-keys"), Some(2));
        assert_eq!(index.position("missing"), None);
        assert_eq!((&index).into_iter().count(), 3);
    }

    #[test]
    fn test_search_and_resolve() {
        let index = TopicIndex::new("Hub", make_topics()).unwrap();

        let results = index.search("ONCLICK");
        let ids: Vec<&str> = results.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["event-handling"]);
        assert_eq!(index.search("").len(), 3);

        assert_eq!(
            index.resolve(Some("event-handling")).map(|t| t.title.as_str()),
            Some("Event Handling")
        );
        assert!(index.resolve(Some("nonexistent")).is_none());
    }

    #[test]
    fn test_resolve_route() {
        let index = TopicIndex::new("Hub", make_topics()).unwrap();
        assert!(index.resolve_route(&Route::parse("#/topic/intro")).is_some());
        assert!(index.resolve_route(&Route::Landing).is_none());
        assert!(index.landing_topic("intro").is_some());
        assert!(index.landing_topic("welcome").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = TopicIndex::new("Empty", Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.search("react").is_empty());
        assert!(index.resolve(Some("intro")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut topics = make_topics();
        topics.push(Topic::new("intro", "Another intro").with_quiz(make_quiz()));

        let err = TopicIndex::new("Hub", topics).unwrap_err();
        assert!(matches!(err, PrimerError::InvalidCatalog { .. }));
        assert!(err.to_string().contains("duplicate topic id `intro`"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let topics = vec![Topic::new("", "Nameless").with_quiz(make_quiz())];
        assert!(TopicIndex::new("Hub", topics).is_err());
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let topics = vec![Topic::new("intro", "Intro")
            .with_keywords(["react", ""])
            .with_quiz(make_quiz())];
        assert!(TopicIndex::new("Hub", topics).is_err());
    }

    #[test]
    fn test_bad_quiz_rejected() {
        let mut quiz = make_quiz();
        quiz.correct_answer_id = "z".to_string();
        let topics = vec![Topic::new("intro", "Intro").with_quiz(quiz)];
        assert!(TopicIndex::new("Hub", topics).is_err());

        let mut quiz = make_quiz();
        quiz.options.push(QuizOption::new("A", "Shadow"));
        let topics = vec![Topic::new("intro", "Intro").with_quiz(quiz)];
        assert!(TopicIndex::new("Hub", topics).is_err());
    }
}
