//! Rendering result with statistics.

use crate::model::{Document, QuestionKind};
use serde::{Deserialize, Serialize};

/// Result of rendering a paper, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered markup
    pub content: String,

    /// Counts gathered while rendering
    pub stats: PaperStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: PaperStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about the structure of a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of top-level questions
    pub question_count: u32,

    /// Regular questions
    pub regular_count: u32,

    /// "OR" questions
    pub or_count: u32,

    /// Multiple-choice questions
    pub mcq_count: u32,

    /// Mixed questions
    pub mixed_count: u32,

    /// Options across all Mcq and Mixed questions
    pub option_count: u32,

    /// Alternatives across all "OR" questions
    pub alternative_count: u32,

    /// Non-empty data tables
    pub table_count: u32,

    /// Questions with a diagram
    pub diagram_count: u32,
}

impl PaperStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for section in &doc.sections {
            stats.add_section();
            for question in &section.questions {
                stats.add_question(&question.kind);
                if !question.table.is_empty() {
                    stats.add_table();
                }
                if question.diagram().is_some() {
                    stats.add_diagram();
                }
            }
        }
        stats
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Count a question of the given kind.
    pub fn add_question(&mut self, kind: &QuestionKind) {
        self.question_count += 1;
        match kind {
            QuestionKind::Regular => self.regular_count += 1,
            QuestionKind::Or { alternatives } => {
                self.or_count += 1;
                self.alternative_count += alternatives.len() as u32;
            }
            QuestionKind::Mcq { options, .. } => {
                self.mcq_count += 1;
                self.option_count += options.len() as u32;
            }
            QuestionKind::Mixed { options } => {
                self.mixed_count += 1;
                self.option_count += options.len() as u32;
            }
        }
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment diagram count.
    pub fn add_diagram(&mut self) {
        self.diagram_count += 1;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &PaperStats) {
        self.section_count += other.section_count;
        self.question_count += other.question_count;
        self.regular_count += other.regular_count;
        self.or_count += other.or_count;
        self.mcq_count += other.mcq_count;
        self.mixed_count += other.mixed_count;
        self.option_count += other.option_count;
        self.alternative_count += other.alternative_count;
        self.table_count += other.table_count;
        self.diagram_count += other.diagram_count;
    }
}
