//! Exam metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Page orientation of the printed paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Upright A4 page
    #[default]
    Portrait,
    /// Rotated A4 page
    Landscape,
}

impl Orientation {
    /// Keyword used in the `@page` size directive.
    pub fn as_css(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Check if this is the landscape orientation.
    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Metadata describing the overall paper.
///
/// `pass_marks <= total_marks` is expected but not enforced here; see
/// [`Document::validate`](super::Document::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exam {
    /// Paper title, rendered as the main heading
    pub title: String,

    /// Subject name
    pub subject: String,

    /// Duration as free text (e.g., "3 Hours")
    pub duration: String,

    /// Total marks (0 = not shown)
    pub total_marks: u32,

    /// Pass marks (0 = not shown)
    pub pass_marks: u32,

    /// Class or grade the paper is set for
    pub class_name: String,

    /// Date the exam is held
    pub exam_date: Option<NaiveDate>,

    /// Academic term
    pub term: String,

    /// Preferred page orientation
    pub orientation: Orientation,
}

impl Exam {
    /// Create exam metadata with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the duration text.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set total and pass marks.
    pub fn with_marks(mut self, total: u32, pass: u32) -> Self {
        self.total_marks = total;
        self.pass_marks = pass;
        self
    }

    /// Set the class name.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the exam date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.exam_date = Some(date);
        self
    }

    /// Set the academic term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Set the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_css() {
        assert_eq!(Orientation::Portrait.as_css(), "portrait");
        assert_eq!(Orientation::Landscape.as_css(), "landscape");
        assert_eq!(Orientation::default(), Orientation::Portrait);
        assert!(Orientation::Landscape.is_landscape());
    }

    #[test]
    fn test_exam_builder() {
        let exam = Exam::new("Final Exam")
            .with_subject("Physics")
            .with_duration("2 Hours")
            .with_marks(100, 40)
            .with_class("10-B")
            .with_term("Spring")
            .with_orientation(Orientation::Landscape);

        assert_eq!(exam.title, "Final Exam");
        assert_eq!(exam.subject, "Physics");
        assert_eq!(exam.total_marks, 100);
        assert_eq!(exam.pass_marks, 40);
        assert_eq!(exam.class_name, "10-B");
        assert!(exam.orientation.is_landscape());
        assert!(exam.exam_date.is_none());
    }

    #[test]
    fn test_exam_deserialize_defaults() {
        let exam: Exam = serde_json::from_str(r#"{"title":"Quiz"}"#).unwrap();
        assert_eq!(exam.title, "Quiz");
        assert_eq!(exam.total_marks, 0);
        assert_eq!(exam.orientation, Orientation::Portrait);
    }
}
