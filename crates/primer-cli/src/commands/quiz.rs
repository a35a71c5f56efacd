//! Quiz command - ask or grade a topic's quiz.

use crate::app::App;
use primer_core::quiz::grade;
use primer_core::{PrimerError, Quiz, Verdict};

/// Run the quiz command.
pub fn run(app: &App, id: &str, answer: Option<&str>) -> anyhow::Result<()> {
    let topic = app
        .index
        .resolve(Some(id))
        .ok_or_else(|| PrimerError::TopicNotFound { id: id.to_string() })?;
    let quiz = &topic.quiz;

    println!("{}", quiz.question);
    for option in &quiz.options {
        println!("  {}) {}", option.id, option.text);
    }

    let Some(answer) = answer else {
        println!();
        println!("Answer with: primer quiz {} --answer <option>", topic.id);
        return Ok(());
    };

    let Some(verdict) = grade(quiz, answer) else {
        anyhow::bail!(
            "'{}' is not one of the options ({})",
            answer,
            option_ids(quiz)
        );
    };

    println!();
    println!("{}", verdict_message(quiz, verdict));
    if let Some(explanation) = &quiz.explanation {
        println!("{}", explanation);
    }

    Ok(())
}

fn option_ids(quiz: &Quiz) -> String {
    quiz.options
        .iter()
        .map(|o| o.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Feedback line for a graded answer.
pub fn verdict_message(quiz: &Quiz, verdict: Verdict) -> String {
    match verdict {
        Verdict::Correct => "Correct! Well done.".to_string(),
        Verdict::Incorrect => match quiz.correct_option() {
            Some(option) => format!("Not quite. The correct answer was '{}'.", option.text),
            None => "Not quite.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::QuizOption;

    fn make_quiz() -> Quiz {
        Quiz {
            question: "What does JSX compile to?".to_string(),
            options: vec![
                QuizOption::new("a", "HTML strings"),
                QuizOption::new("b", "React.createElement calls"),
            ],
            correct_answer_id: "b".to_string(),
            explanation: None,
        }
    }

    #[test]
    fn test_verdict_message() {
        let quiz = make_quiz();
        assert_eq!(verdict_message(&quiz, Verdict::Correct), "Correct! Well done.");
        assert_eq!(
            verdict_message(&quiz, Verdict::Incorrect),
            "Not quite. The correct answer was 'React.createElement calls'."
        );
    }

    #[test]
    fn test_option_ids() {
        assert_eq!(option_ids(&make_quiz()), "a, b");
    }
}
