//! Route parsing and topic resolution.
//!
//! There is one route shape, `#/topic/{id}`. Everything else, including a
//! missing or nested id, is the landing view.

use crate::types::Topic;
use std::fmt;

const TOPIC_PREFIX: &str = "/topic/";

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The default welcome view
    Landing,

    /// A topic detail view, keyed by topic id
    Topic(String),
}

impl Route {
    /// Parse a route fragment such as `#/topic/event-handling`.
    ///
    /// The leading `#` is optional. Unrecognised input falls back to
    /// [`Route::Landing`] rather than failing.
    pub fn parse(input: &str) -> Self {
        let path = input.trim();
        let path = path.strip_prefix('#').unwrap_or(path);

        match path.strip_prefix(TOPIC_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Topic(id.to_string()),
            _ => Route::Landing,
        }
    }

    /// The route that displays `topic`
    pub fn for_topic(topic: &Topic) -> Self {
        Route::Topic(topic.id.clone())
    }

    /// The topic id this route points at, if any
    pub fn topic_id(&self) -> Option<&str> {
        match self {
            Route::Landing => None,
            Route::Topic(id) => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Landing => f.write_str("#/"),
            Route::Topic(id) => write!(f, "#{}{}", TOPIC_PREFIX, id),
        }
    }
}

/// Look up the topic whose id equals `route_id`.
///
/// The comparison is exact and case-sensitive. `None`, an empty id, and an id
/// that names no topic all resolve to `None`, which callers render as the
/// "topic not found" view.
pub fn resolve<'a>(topics: &'a [Topic], route_id: Option<&str>) -> Option<&'a Topic> {
    let id = route_id.filter(|id| !id.is_empty())?;
    topics.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_topics() -> Vec<Topic> {
        vec![
            Topic::new("intro", "Introduction to React"),
            Topic::new("event-handling", "Event Handling"),
        ]
    }

    #[test]
    fn test_resolve_found() {
        let topics = make_topics();
        let topic = resolve(&topics, Some("event-handling")).unwrap();
        assert_eq!(topic.title, "Event Handling");
    }

    #[test]
    fn test_resolve_not_found() {
        let topics = make_topics();
        assert!(resolve(&topics, Some("nonexistent")).is_none());
        assert!(resolve(&topics, Some("")).is_none());
        assert!(resolve(&topics, None).is_none());
        assert!(resolve(&[], Some("intro")).is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let topics = make_topics();
        assert!(resolve(&topics, Some("Intro")).is_none());
        assert!(resolve(&topics, Some("intro ")).is_none());
    }

    #[test]
    fn test_resolve_totality() {
        let topics = make_topics();
        for id in ["intro", "INTRO", "event", "event-handling", "", "#/topic/intro", "ü"] {
            if let Some(topic) = resolve(&topics, Some(id)) {
                assert_eq!(topic.id, id);
            }
        }
    }

    #[test]
    fn test_parse_topic_route() {
        assert_eq!(
            Route::parse("#/topic/event-handling"),
            Route::Topic("event-handling".to_string())
        );
        assert_eq!(
            Route::parse("/topic/intro"),
            Route::Topic("intro".to_string())
        );
    }

    #[test]
    fn test_parse_fallback_to_landing() {
        assert_eq!(Route::parse("#/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("#/topic/"), Route::Landing);
        assert_eq!(Route::parse("#/topic/a/b"), Route::Landing);
        assert_eq!(Route::parse("#/lessons/intro"), Route::Landing);
        assert_eq!(Route::parse("intro"), Route::Landing);
    }

    #[test]
    fn test_display_round_trip() {
        let route = Route::Topic("lists-keys".to_string());
        assert_eq!(route.to_string(), "#/topic/lists-keys");
        assert_eq!(Route::parse(&route.to_string()), route);
        assert_eq!(Route::Landing.to_string(), "#/");
    }

    #[test]
    fn test_topic_id() {
        assert_eq!(Route::parse("#/topic/intro").topic_id(), Some("intro"));
        assert_eq!(Route::Landing.topic_id(), None);
    }
}
