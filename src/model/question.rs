//! Question types.

use super::DataTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single question on the paper.
///
/// `text` is pre-formatted markup produced by the editor and is emitted
/// verbatim by the renderer. Everything variant-specific lives in
/// [`QuestionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question body (trusted markup)
    #[serde(default)]
    pub text: String,

    /// Path to a diagram image on the local filesystem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_path: Option<PathBuf>,

    /// Tabular data shown next to the question
    #[serde(default, skip_serializing_if = "DataTable::is_empty")]
    pub table: DataTable,

    /// Variant and its payload
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// The closed set of question variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Plain question
    Regular,

    /// Question with alternatives separated by "OR"
    Or {
        /// Alternatives, rendered in order
        #[serde(default)]
        alternatives: Vec<Question>,
    },

    /// Multiple choice, options laid out two per row
    Mcq {
        /// Option texts
        #[serde(default)]
        options: Vec<String>,
        /// Index of the correct option (never rendered on the paper)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        answer: Option<usize>,
    },

    /// Lettered options, one per line
    Mixed {
        /// Option texts
        #[serde(default)]
        options: Vec<String>,
    },
}

impl QuestionKind {
    /// Short lowercase name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::Regular => "regular",
            QuestionKind::Or { .. } => "or",
            QuestionKind::Mcq { .. } => "mcq",
            QuestionKind::Mixed { .. } => "mixed",
        }
    }
}

impl Question {
    fn with_kind(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            text: text.into(),
            diagram_path: None,
            table: DataTable::new(),
            kind,
        }
    }

    /// Create a regular question.
    pub fn regular(text: impl Into<String>) -> Self {
        Self::with_kind(text, QuestionKind::Regular)
    }

    /// Create an "OR" question with the given alternatives.
    pub fn or(text: impl Into<String>, alternatives: Vec<Question>) -> Self {
        Self::with_kind(text, QuestionKind::Or { alternatives })
    }

    /// Create a multiple-choice question.
    pub fn mcq<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::with_kind(
            text,
            QuestionKind::Mcq {
                options: options.into_iter().map(Into::into).collect(),
                answer: None,
            },
        )
    }

    /// Create a question with lettered options on separate lines.
    pub fn mixed<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::with_kind(
            text,
            QuestionKind::Mixed {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Attach a diagram.
    pub fn with_diagram(mut self, path: impl Into<PathBuf>) -> Self {
        self.diagram_path = Some(path.into());
        self
    }

    /// Attach a data table.
    pub fn with_table(mut self, table: DataTable) -> Self {
        self.table = table;
        self
    }

    /// Append an alternative. Has no effect unless this is an "OR" question.
    pub fn with_alternative(mut self, alternative: Question) -> Self {
        if let QuestionKind::Or { alternatives } = &mut self.kind {
            alternatives.push(alternative);
        }
        self
    }

    /// Append an option. Has no effect on regular and "OR" questions.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        match &mut self.kind {
            QuestionKind::Mcq { options, .. } | QuestionKind::Mixed { options } => {
                options.push(option.into());
            }
            QuestionKind::Regular | QuestionKind::Or { .. } => {}
        }
        self
    }

    /// Record the correct option of a multiple-choice question.
    pub fn with_answer(mut self, index: usize) -> Self {
        if let QuestionKind::Mcq { answer, .. } = &mut self.kind {
            *answer = Some(index);
        }
        self
    }

    /// Options of an Mcq or Mixed question; empty for other variants.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Mcq { options, .. } | QuestionKind::Mixed { options } => options,
            QuestionKind::Regular | QuestionKind::Or { .. } => &[],
        }
    }

    /// Alternatives of an "OR" question; empty for other variants.
    pub fn alternatives(&self) -> &[Question] {
        match &self.kind {
            QuestionKind::Or { alternatives } => alternatives,
            _ => &[],
        }
    }

    /// The diagram path, if any. An empty path counts as no diagram.
    pub fn diagram(&self) -> Option<&Path> {
        self.diagram_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

impl Default for Question {
    fn default() -> Self {
        Self::regular("")
    }
}
