//! Show command - print a topic by id or route.

use crate::app::{route_for, App};
use crate::render::{blocks_to_text, landing_blocks, topic_blocks};
use primer_core::{PrimerError, Route, Topic};

/// Run the show command.
pub fn run(app: &App, target: &str) -> anyhow::Result<()> {
    let route = route_for(target);

    let topic = match &route {
        Route::Landing => {
            println!("Welcome to {}", app.index.title());
            println!();
            if let Some(topic) = app.landing_topic() {
                print!("{}", blocks_to_text(&landing_blocks(topic)));
                println!();
            }
            println!("Run 'primer list' to see the available topics.");
            return Ok(());
        }
        Route::Topic(id) => match app.index.resolve_route(&route) {
            Some(topic) => topic,
            None => {
                println!("Topic Not Found");
                println!();
                println!("Sorry, we couldn't find the topic you were looking for.");
                println!("Run 'primer list' to see the available topics.");
                return Err(PrimerError::TopicNotFound { id: id.clone() }.into());
            }
        },
    };

    print!("{}", format_topic(topic));
    Ok(())
}

/// Full plain-text rendering of a topic, including hint and quiz.
fn format_topic(topic: &Topic) -> String {
    let mut out = blocks_to_text(&topic_blocks(topic));

    if let Some(hint) = &topic.exercise.solution_hint {
        out.push_str(&format!("\nSolution hint: {}\n", hint));
    }

    let quiz = &topic.quiz;
    out.push_str("\nQuiz\n----\n");
    out.push_str(&quiz.question);
    out.push('\n');
    for option in &quiz.options {
        out.push_str(&format!("  {}) {}\n", option.id, option.text));
    }
    out.push_str(&format!(
        "\nAnswer with: primer quiz {} --answer <option>\n",
        topic.id
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::{Quiz, QuizOption};

    #[test]
    fn test_format_topic_includes_quiz() {
        let topic = Topic::new("props-state", "Props and State").with_quiz(Quiz {
            question: "Which is mutable?".to_string(),
            options: vec![QuizOption::new("a", "Props"), QuizOption::new("b", "State")],
            correct_answer_id: "b".to_string(),
            explanation: None,
        });

        let text = format_topic(&topic);
        assert!(text.starts_with("Props and State\n"));
        assert!(text.contains("Which is mutable?"));
        assert!(text.contains("  b) State"));
        assert!(text.contains("primer quiz props-state"));
    }
}
