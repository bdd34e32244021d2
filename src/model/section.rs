//! Sections group questions under a label.

use super::Question;
use serde::{Deserialize, Serialize};

/// A labeled, ordered group of questions.
///
/// Question order is both rendering order and numbering order; numbering
/// restarts at 1 in every section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Heading (e.g., "Section A")
    pub label: String,

    /// Instruction line shown under the heading
    pub subtitle: String,

    /// Questions in order
    pub questions: Vec<Question>,
}

impl Section {
    /// Create an empty section with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Append a question and return self.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Append a question.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Get the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Check if the section has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
