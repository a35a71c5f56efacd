//! Turning topics into displayable blocks.
//!
//! Both the one-shot commands and the TUI show the same topic layout, so the
//! layout is built once as a list of [`Block`]s. Plain-text output walks the
//! blocks here; the TUI maps them to styled lines.

use crossterm::style::Stylize;
use primer_core::{markup, HighlightSegment, Topic};

/// One piece of a rendered topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Paragraph(String),
    Bullet(String),
    Code(String),
    Note(String),
}

/// Lay out the read-only parts of a topic: explanation, code sample,
/// interactive example and exercise. The exercise hint and the quiz are
/// interactive and rendered by the caller.
pub fn topic_blocks(topic: &Topic) -> Vec<Block> {
    let mut blocks = vec![Block::Title(topic.title.clone())];

    blocks.push(Block::Heading("Explanation".to_string()));
    push_explanation(&mut blocks, topic);

    let example = &topic.code_example;
    if !example.code.trim().is_empty() {
        blocks.push(Block::Heading("Code Example".to_string()));
        if let Some(description) = &example.description {
            blocks.push(Block::Paragraph(description.clone()));
        }
        blocks.push(Block::Code(example.code.trim().to_string()));
        if let Some(output) = &example.output_description {
            blocks.push(Block::Note(output.clone()));
        }
    }

    let interactive = &topic.interactive_example;
    blocks.push(Block::Heading("Interactive Example".to_string()));
    if !interactive.description.is_empty() {
        blocks.push(Block::Paragraph(interactive.description.clone()));
    }
    if !interactive.tasks.is_empty() {
        blocks.push(Block::Paragraph("Things to try:".to_string()));
        blocks.extend(interactive.tasks.iter().cloned().map(Block::Bullet));
    }

    let exercise = &topic.exercise;
    blocks.push(Block::Heading(format!("Exercise: {}", exercise.title)));
    for line in exercise.description.lines().filter(|l| !l.trim().is_empty()) {
        blocks.push(Block::Paragraph(line.trim().to_string()));
    }
    for (i, task) in exercise.mini_tasks.iter().enumerate() {
        blocks.push(Block::Bullet(format!("Task {}: {}", i + 1, task.task)));
        if let Some(code) = &task.code {
            blocks.push(Block::Code(code.trim().to_string()));
        }
        if let Some(hint) = &task.hint {
            blocks.push(Block::Note(format!("Hint: {}", hint)));
        }
    }

    blocks
}

/// The welcome view: the landing topic's title and explanation followed by
/// its code sample as a quick example. Exercise and quiz are left out.
pub fn landing_blocks(topic: &Topic) -> Vec<Block> {
    let mut blocks = vec![Block::Title(topic.title.clone())];
    push_explanation(&mut blocks, topic);

    let code = topic.code_example.code.trim();
    if !code.is_empty() {
        blocks.push(Block::Heading("Quick Example".to_string()));
        blocks.push(Block::Code(code.to_string()));
    }

    blocks
}

fn push_explanation(blocks: &mut Vec<Block>, topic: &Topic) {
    for line in markup::to_plain_text(&topic.explanation).lines() {
        match line.strip_prefix('\u{2022}') {
            Some(item) => blocks.push(Block::Bullet(item.trim().to_string())),
            None => blocks.push(Block::Paragraph(line.to_string())),
        }
    }
}

/// Split text on backtick pairs into `(text, is_code)` runs.
///
/// An unpaired trailing backtick is kept as literal text.
pub fn code_spans(text: &str) -> Vec<(String, bool)> {
    let parts: Vec<&str> = text.split('`').collect();
    let paired = if parts.len() % 2 == 0 {
        parts.len() - 1
    } else {
        parts.len()
    };

    let mut spans = Vec::with_capacity(parts.len());
    for (i, part) in parts[..paired].iter().enumerate() {
        if !part.is_empty() {
            spans.push((part.to_string(), i % 2 == 1));
        }
    }

    if paired < parts.len() {
        let tail = format!("`{}", parts[paired]);
        match spans.last_mut() {
            Some((last, false)) => last.push_str(&tail),
            _ => spans.push((tail, false)),
        }
    }

    spans
}

/// Render blocks as plain text.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Title(text) => {
                out.push_str(text);
                out.push('\n');
                out.push_str(&"=".repeat(text.chars().count()));
                out.push('\n');
            }
            Block::Heading(text) => {
                out.push('\n');
                out.push_str(text);
                out.push('\n');
                out.push_str(&"-".repeat(text.chars().count()));
                out.push('\n');
            }
            Block::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Bullet(text) => {
                out.push_str("  \u{2022} ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Code(code) => {
                for line in code.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Block::Note(text) => {
                out.push_str("  > ");
                out.push_str(text);
                out.push('\n');
            }
        }
    }
    out
}

/// Render highlight segments for a terminal, emphasising matches.
pub fn segments_to_ansi(segments: &[HighlightSegment], emphasise: bool) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched && emphasise {
                s.text.as_str().bold().black().on_cyan().to_string()
            } else {
                s.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::{highlight, CodeExample, Exercise, MiniTask};

    fn make_topic() -> Topic {
        let mut topic = Topic::new("lists-keys", "Lists and Keys").with_explanation(
            "<p>Render collections with <code>map()</code>.</p><ul><li>Keys must be stable</li></ul>",
        );
        topic.code_example = CodeExample {
            description: Some("Rendering todos:".to_string()),
            code: "\n<ul>{todos.map(t => <li key={t.id}>{t.text}</li>)}</ul>\n".to_string(),
            output_description: None,
        };
        topic.exercise = Exercise {
            title: "Filterable List".to_string(),
            description: "Filter fruits as you type.".to_string(),
            solution_hint: Some("Use `filter` first".to_string()),
            mini_tasks: vec![MiniTask {
                task: "Render the list".to_string(),
                code: None,
                hint: Some("Use map".to_string()),
            }],
        };
        topic
    }

    #[test]
    fn test_topic_blocks_layout() {
        let blocks = topic_blocks(&make_topic());
        assert_eq!(blocks[0], Block::Title("Lists and Keys".to_string()));
        assert!(blocks.contains(&Block::Paragraph("Render collections with map().".to_string())));
        assert!(blocks.contains(&Block::Bullet("Keys must be stable".to_string())));
        assert!(blocks.contains(&Block::Heading("Code Example".to_string())));
        assert!(blocks.contains(&Block::Heading("Exercise: Filterable List".to_string())));
        assert!(blocks.contains(&Block::Bullet("Task 1: Render the list".to_string())));
        assert!(blocks.contains(&Block::Note("Hint: Use map".to_string())));
    }

    #[test]
    fn test_code_section_skipped_without_code() {
        let blocks = topic_blocks(&Topic::new("intro", "Intro"));
        assert!(!blocks.contains(&Block::Heading("Code Example".to_string())));
    }

    #[test]
    fn test_landing_blocks_skip_exercise_and_quiz() {
        let blocks = landing_blocks(&make_topic());
        assert_eq!(blocks[0], Block::Title("Lists and Keys".to_string()));
        assert!(blocks.contains(&Block::Bullet("Keys must be stable".to_string())));
        assert!(blocks.contains(&Block::Heading("Quick Example".to_string())));
        assert!(blocks.iter().any(|b| matches!(b, Block::Code(_))));
        assert!(!blocks
            .iter()
            .any(|b| matches!(b, Block::Heading(h) if h.starts_with("Exercise"))));
        assert!(!blocks.contains(&Block::Note("Hint: Use map".to_string())));
    }

    #[test]
    fn test_blocks_to_text() {
        let text = blocks_to_text(&[
            Block::Title("Intro".to_string()),
            Block::Code("let x = 1;".to_string()),
        ]);
        assert_eq!(text, "Intro\n=====\n    let x = 1;\n");
    }

    #[test]
    fn test_code_spans() {
        assert_eq!(
            code_spans("Use `npm create vite` then edit `App.tsx`."),
            vec![
                ("Use ".to_string(), false),
                ("npm create vite".to_string(), true),
                (" then edit ".to_string(), false),
                ("App.tsx".to_string(), true),
                (".".to_string(), false),
            ]
        );
        assert_eq!(code_spans("plain"), vec![("plain".to_string(), false)]);
        assert_eq!(
            code_spans("one ` unpaired"),
            vec![("one ` unpaired".to_string(), false)]
        );
        assert_eq!(
            code_spans("`a` and `b"),
            vec![
                ("a".to_string(), true),
                (" and `b".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_segments_to_ansi_plain_when_disabled() {
        let segments = highlight("Event Handling", "event");
        assert_eq!(segments_to_ansi(&segments, false), "Event Handling");
        assert_ne!(segments_to_ansi(&segments, true), "Event Handling");
    }
}
