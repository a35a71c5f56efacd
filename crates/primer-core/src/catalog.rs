//! Loading topic catalogs.
//!
//! A catalog is a title plus an ordered list of topics. One is compiled into
//! the binary; a different one can be supplied as a JSON or TOML file. Either
//! way it is read once at startup and turned into a [`TopicIndex`].
//!
//! ## Catalog File Format
//!
//! ```json
//! {
//!   "title": "React Learning Hub",
//!   "topics": [
//!     {
//!       "id": "intro",
//!       "title": "Introduction to React",
//!       "explanation": "<p>React is a JavaScript library...</p>",
//!       "keywords": ["react", "ui"],
//!       "exercise": { "title": "...", "description": "..." },
//!       "quiz": { "question": "...", "options": [...], "correct_answer_id": "b" }
//!     }
//!   ]
//! }
//! ```

use crate::error::{PrimerError, Result};
use crate::index::TopicIndex;
use crate::types::Topic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_CATALOG: &str = include_str!("../assets/topics.json");

/// Serialized form of a topic catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Display title for the hub
    pub title: String,

    pub topics: Vec<Topic>,
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(CatalogFormat::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(CatalogFormat::Toml)
        } else {
            None
        }
    }
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        debug!("Loading bundled catalog");
        Self::parse(BUNDLED_CATALOG, CatalogFormat::Json)
    }

    /// Load a catalog file, choosing the format by extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PrimerError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let format =
            CatalogFormat::from_path(path).ok_or_else(|| PrimerError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        info!(path = %path.display(), ?format, "Loading catalog");
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, format)
    }

    /// Parse catalog text in the given format.
    pub fn parse(contents: &str, format: CatalogFormat) -> Result<Self> {
        let catalog: Catalog = match format {
            CatalogFormat::Json => serde_json::from_str(contents)?,
            CatalogFormat::Toml => toml::from_str(contents)?,
        };
        Ok(catalog)
    }

    /// Validate the topics and build the index.
    pub fn into_index(self) -> Result<TopicIndex> {
        TopicIndex::new(self.title, self.topics)
    }
}

/// Load the catalog at `path`, or the bundled one when no path is given.
pub fn load_index(path: Option<&Path>) -> Result<TopicIndex> {
    let catalog = match path {
        Some(path) => Catalog::load_from(path)?,
        None => Catalog::bundled()?,
    };
    catalog.into_index()
}
