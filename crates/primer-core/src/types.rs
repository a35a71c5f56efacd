//! Core data types for Primer.
//!
//! A [`Topic`] is one instructional unit. Only `id`, `title`, `keywords` and
//! `explanation` take part in search and routing; the code sample, the
//! interactive prompt, the exercise and the quiz are carried through to the
//! display layer untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single instructional topic.
///
/// ## Design Notes
///
/// - `id` is the routing key (`#/topic/{id}`); it is compared case-sensitively
/// - `explanation` holds trusted inline markup; search only sees it with tags
///   removed
/// - Topics are never mutated after the catalog is loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Unique, stable identifier
    pub id: String,

    /// Display name shown in the navigator
    pub title: String,

    /// Explanation body with embedded markup
    pub explanation: String,

    /// Search keywords, matched independently
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Worked code sample
    #[serde(default)]
    pub code_example: CodeExample,

    /// Prompt for trying things out locally
    #[serde(default)]
    pub interactive_example: InteractiveExample,

    /// Practice exercise
    pub exercise: Exercise,

    /// Multiple-choice quiz
    pub quiz: Quiz,
}

impl Topic {
    /// Create a topic with the searchable fields set and empty display blocks.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Topic {
            id: id.into(),
            title: title.into(),
            explanation: String::new(),
            keywords: Vec::new(),
            code_example: CodeExample::default(),
            interactive_example: InteractiveExample::default(),
            exercise: Exercise::default(),
            quiz: Quiz::default(),
        }
    }

    /// Set the explanation markup
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Set the keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the quiz
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = quiz;
        self
    }
}

impl PartialEq for Topic {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Topic {}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeExample {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub code: String,

    /// What running the sample would show
    #[serde(default)]
    pub output_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractiveExample {
    #[serde(default)]
    pub description: String,

    /// "Things to try" bullet list
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exercise {
    pub title: String,

    pub description: String,

    /// Hint text; backtick spans are rendered as inline code
    #[serde(default)]
    pub solution_hint: Option<String>,

    #[serde(default)]
    pub mini_tasks: Vec<MiniTask>,
}

/// A smaller step inside an exercise, optionally with starter code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiniTask {
    pub task: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        QuizOption {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A single-answer multiple-choice question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,

    pub options: Vec<QuizOption>,

    /// Must name one of `options`
    pub correct_answer_id: String,

    /// Shown after the answer is submitted
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Quiz {
    /// Look up an option by id, ignoring ASCII case like every other
    /// answer comparison.
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id.eq_ignore_ascii_case(id))
    }

    /// The option marked as correct, if the quiz is well formed
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.option(&self.correct_answer_id)
    }

    /// Check an answer. Option ids compare case-insensitively so "B" and "b"
    /// are the same answer.
    pub fn is_correct(&self, answer_id: &str) -> bool {
        answer_id.eq_ignore_ascii_case(&self.correct_answer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_quiz() -> Quiz {
        Quiz {
            question: "What is React primarily used for?".to_string(),
            options: vec![
                QuizOption::new("a", "Backend development"),
                QuizOption::new("b", "Building user interfaces"),
            ],
            correct_answer_id: "b".to_string(),
            explanation: None,
        }
    }

    #[test]
    fn test_quiz_correct_option() {
        let quiz = make_quiz();
        assert_eq!(
            quiz.correct_option().map(|o| o.text.as_str()),
            Some("Building user interfaces")
        );
        assert!(quiz.option("z").is_none());
        assert_eq!(quiz.option("A").map(|o| o.id.as_str()), Some("a"));
    }

    #[test]
    fn test_quiz_is_correct() {
        let quiz = make_quiz();
        assert!(quiz.is_correct("b"));
        assert!(quiz.is_correct("B"));
        assert!(!quiz.is_correct("a"));
    }

    #[test]
    fn test_topic_equality_by_id() {
        let a = Topic::new("intro", "Introduction to React");
        let b = Topic::new("intro", "Renamed");
        let c = Topic::new("events", "Introduction to React");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deserialize_minimal_topic() {
        let json = r#"{
            "id": "intro",
            "title": "Introduction",
            "explanation": "<p>Hello</p>",
            "exercise": { "title": "Setup", "description": "Install things" },
            "quiz": {
                "question": "Q?",
                "options": [{ "id": "a", "text": "A" }],
                "correct_answer_id": "a"
            }
        }"#;
        let topic: Topic = serde_json::from_str(json).unwrap();
        assert!(topic.keywords.is_empty());
        assert!(topic.code_example.code.is_empty());
        assert!(topic.exercise.mini_tasks.is_empty());
        assert_eq!(topic.quiz.correct_answer_id, "a");
    }
}
