//! Search command - show the topics a query matches.

use crate::app::App;
use crate::render::segments_to_ansi;
use crate::OutputFormat;
use primer_core::{highlight, SearchQuery};
use std::time::Instant;
use tracing::debug;

/// Run the search command.
pub fn run(app: &App, query: &str, output: OutputFormat) -> anyhow::Result<()> {
    let query = SearchQuery::new(query);

    let start = Instant::now();
    let results = app.index.search_with_fields(&query);
    debug!(elapsed = ?start.elapsed(), "Search finished");

    match output {
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No topics match your search.");
            }

            let ui = &app.config.ui;
            for result in &results {
                let topic = result.topic;
                let title = highlight(&topic.title, query.as_str());
                let mut line = format!(
                    "{} ({})",
                    segments_to_ansi(&title, ui.highlight_matches),
                    topic.id
                );

                if ui.show_match_field {
                    if let Some(field) = result.field {
                        line.push_str(&format!("  [{}]", field));
                    }
                }

                println!("{}", line);
            }

            if results.len() < app.index.len() {
                eprintln!();
                eprintln!("Found {} of {} topics", results.len(), app.index.len());
            }
        }
        OutputFormat::Json => {
            let json_results: Vec<serde_json::Value> = results
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.topic.id,
                        "title": r.topic.title,
                        "matched_field": r.field,
                        "segments": highlight(&r.topic.title, query.as_str()),
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&json_results)?);
        }
    }

    Ok(())
}
