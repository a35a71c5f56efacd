//! Quiz answering state.
//!
//! A [`QuizSession`] tracks one attempt at a topic's quiz: which option is
//! selected and whether it has been submitted. Nothing is persisted; moving
//! to another topic starts a fresh session.

use crate::types::Quiz;

/// Outcome of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Grade a single answer against `quiz`.
///
/// Returns `None` if `answer_id` is not one of the quiz options.
pub fn grade(quiz: &Quiz, answer_id: &str) -> Option<Verdict> {
    quiz.option(answer_id)?;

    Some(if quiz.is_correct(answer_id) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    })
}

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    selected: Option<usize>,
    submitted: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected option
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Select the option at `index`. Ignored once submitted or out of range.
    pub fn select(&mut self, quiz: &Quiz, index: usize) -> bool {
        if self.submitted || index >= quiz.options.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Move the selection by `delta`, clamped to the option list.
    ///
    /// With nothing selected yet, moving forward selects the first option and
    /// moving back selects the last.
    pub fn move_selection(&mut self, quiz: &Quiz, delta: isize) {
        let count = quiz.options.len();
        if self.submitted || count == 0 {
            return;
        }

        let next = match self.selected {
            None if delta >= 0 => 0,
            None => count - 1,
            Some(current) => current.saturating_add_signed(delta).min(count - 1),
        };
        self.selected = Some(next);
    }

    /// Submit the selected option.
    ///
    /// Returns `None` when nothing is selected; the caller should prompt for
    /// an answer.
    pub fn submit(&mut self, quiz: &Quiz) -> Option<Verdict> {
        let option = quiz.options.get(self.selected?)?;
        self.submitted = true;
        grade(quiz, &option.id)
    }

    /// The verdict for a submitted session
    pub fn verdict(&self, quiz: &Quiz) -> Option<Verdict> {
        if !self.submitted {
            return None;
        }
        let option = quiz.options.get(self.selected?)?;
        grade(quiz, &option.id)
    }

    /// Clear the selection and allow another attempt.
    pub fn reset(&mut self) {
        self.selected = None;
        self.submitted = false;
    }
}
