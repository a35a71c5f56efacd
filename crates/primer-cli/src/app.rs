//! Application state management.

use primer_core::{catalog, Config, Route, Topic, TopicIndex};
use std::path::PathBuf;
use tracing::info;

/// Shared application state.
pub struct App {
    /// Configuration
    pub config: Config,

    /// The topic index, loaded once
    pub index: TopicIndex,
}

impl App {
    /// Create a new application instance.
    ///
    /// A catalog given on the command line wins over the configured one; with
    /// neither, the bundled catalog is used.
    pub fn new(config: Config, catalog_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let catalog_path = catalog_override.or_else(|| config.general.catalog_path.clone());
        let index = match catalog::load_index(catalog_path.as_deref()) {
            Ok(index) => index,
            Err(e) if e.is_content_error() => {
                return Err(anyhow::Error::new(e).context(
                    "the catalog could not be used; fix its contents or pass another --catalog",
                ));
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            catalog = %catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string()),
            topics = index.len(),
            "Application initialized"
        );

        Ok(App { config, index })
    }

    /// The topic shown on the landing view.
    pub fn landing_topic(&self) -> Option<&Topic> {
        self.index.landing_topic(&self.config.general.landing_topic)
    }
}

/// Interpret user input as a route.
///
/// Anything containing a `/` is parsed as a route fragment; a bare word is
/// taken as a topic id.
pub fn route_for(input: &str) -> Route {
    let input = input.trim();
    if input.is_empty() || input.contains('/') {
        Route::parse(input)
    } else {
        Route::Topic(input.to_string())
    }
}
