//! # Primer Core Library
//!
//! This crate provides the topic catalog, search filter, highlighter and route
//! resolver behind the Primer learning hub. Everything here is synchronous
//! and free of I/O apart from loading the catalog and configuration at
//! startup.
//!
//! ## Architecture
//!
//! - **Types** (`types`): Topic records and their display-only blocks
//! - **Index** (`index`): The ordered, validated, read-only topic list
//! - **Catalog** (`catalog`): Loading the bundled or a user-supplied catalog
//! - **Search** (`search`): Case-insensitive substring filtering
//! - **Highlight** (`highlight`): Splitting display text into matched runs
//! - **Route** (`route`): `#/topic/{id}` parsing and topic lookup
//! - **Debounce** (`debounce`): The "is searching" indicator
//! - **Quiz** (`quiz`): Answer selection and grading
//! - **Config** (`config`): Configuration management
//!
//! ## Example
//!
//! ```rust
//! use primer_core::{catalog, highlight};
//!
//! let index = catalog::load_index(None).unwrap();
//! for topic in index.search("hooks") {
//!     let segments = highlight(&topic.title, "hooks");
//!     assert!(segments.iter().any(|s| s.matched));
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod index;
pub mod markup;
pub mod quiz;
pub mod route;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use debounce::SearchIndicator;
pub use error::{PrimerError, Result};
pub use highlight::{highlight, HighlightSegment};
pub use index::TopicIndex;
pub use quiz::{QuizSession, Verdict};
pub use route::{resolve, Route};
pub use search::{filter_topics, SearchField, SearchQuery, SearchResult};
pub use types::{CodeExample, Exercise, InteractiveExample, MiniTask, Quiz, QuizOption, Topic};
