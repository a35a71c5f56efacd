//! List command - print every topic in catalog order.

use crate::app::App;
use crate::OutputFormat;
use primer_core::Route;

/// Run the list command.
pub fn run(app: &App, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => {
            println!("{}", app.index.title());
            println!("{}", "=".repeat(app.index.title().chars().count()));
            println!();

            let width = app.index.iter().map(|t| t.id.len()).max().unwrap_or(0);
            for topic in &app.index {
                println!("  {:width$}  {}", topic.id, topic.title, width = width);
            }

            eprintln!();
            eprintln!("{} topics", app.index.len());
        }
        OutputFormat::Json => {
            let topics: Vec<serde_json::Value> = app
                .index
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "title": t.title,
                        "keywords": t.keywords,
                        "route": Route::for_topic(t).to_string(),
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&topics)?);
        }
    }

    Ok(())
}
