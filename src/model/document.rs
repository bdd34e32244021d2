//! Document-level types.

use super::{Exam, QuestionKind, Section};
use crate::error::{Error, Result};
use crate::render::option_label;
use serde::{Deserialize, Serialize};

/// A complete exam paper: metadata plus ordered sections.
///
/// The renderer treats a document as an immutable snapshot; building and
/// editing happen elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Exam metadata
    pub exam: Exam,

    /// Sections in order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a document with no sections.
    pub fn new(exam: Exam) -> Self {
        Self {
            exam,
            sections: Vec::new(),
        }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Add a section and return self.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of questions across all sections.
    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(Section::question_count).sum()
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// A paper is valid when it has a title and at least one section.
    pub fn is_valid(&self) -> bool {
        !self.exam.title.is_empty() && !self.sections.is_empty()
    }

    /// Check the preconditions for exporting this paper.
    ///
    /// Rendering does not require this; an invalid paper still renders.
    pub fn validate(&self) -> Result<()> {
        if self.exam.title.trim().is_empty() {
            return Err(Error::InvalidDocument(
                "exam paper is invalid or incomplete".into(),
            ));
        }
        if self.sections.is_empty() {
            return Err(Error::InvalidDocument("exam paper has no sections".into()));
        }
        if self.exam.pass_marks > self.exam.total_marks {
            return Err(Error::InvalidDocument(format!(
                "pass marks ({}) exceed total marks ({})",
                self.exam.pass_marks, self.exam.total_marks
            )));
        }
        Ok(())
    }

    /// Reset metadata and drop all sections.
    pub fn clear(&mut self) {
        self.exam = Exam::default();
        self.sections.clear();
    }

    /// Correct answers of every multiple-choice question that records one.
    pub fn answer_key(&self) -> Vec<AnswerKeyEntry> {
        let mut entries = Vec::new();
        for section in &self.sections {
            for (i, question) in section.questions.iter().enumerate() {
                if let QuestionKind::Mcq {
                    options,
                    answer: Some(answer),
                } = &question.kind
                {
                    if *answer < options.len() {
                        entries.push(AnswerKeyEntry {
                            section: section.label.clone(),
                            number: i + 1,
                            label: option_label(*answer),
                        });
                    }
                }
            }
        }
        entries
    }
}

/// One line of the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKeyEntry {
    /// Label of the section holding the question
    pub section: String,

    /// 1-based question number within the section
    pub number: usize,

    /// Letter of the correct option
    pub label: String,
}
