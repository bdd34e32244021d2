//! Rendering options and configuration.

use crate::model::{Exam, Orientation};

/// Default font family for printed papers.
pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Options for rendering a paper to markup.
///
/// Values are written into the stylesheet verbatim. Nothing is clamped;
/// callers validate upstream if they need to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Font family for body text
    pub font_family: String,

    /// Font size in points
    pub font_size: u32,

    /// Page orientation
    pub orientation: Orientation,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options using the orientation stored on the exam.
    pub fn for_exam(exam: &Exam) -> Self {
        Self::default().with_orientation(exam.orientation)
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the page orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Use a rotated A4 page.
    pub fn landscape(self) -> Self {
        self.with_orientation(Orientation::Landscape)
    }

    /// Use an upright A4 page.
    pub fn portrait(self) -> Self {
        self.with_orientation(Orientation::Portrait)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            orientation: Orientation::Portrait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.font_family, "Times New Roman");
        assert_eq!(options.font_size, 12);
        assert_eq!(options.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_font_family("Georgia")
            .with_font_size(14)
            .landscape();

        assert_eq!(options.font_family, "Georgia");
        assert_eq!(options.font_size, 14);
        assert!(options.orientation.is_landscape());
        assert_eq!(options.portrait().orientation, Orientation::Portrait);
    }

    #[test]
    fn test_for_exam_copies_orientation() {
        let exam = Exam::new("T").with_orientation(Orientation::Landscape);
        let options = RenderOptions::for_exam(&exam);
        assert_eq!(options.orientation, Orientation::Landscape);
        assert_eq!(options.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_font_size_not_clamped() {
        let options = RenderOptions::new().with_font_size(0);
        assert_eq!(options.font_size, 0);
    }
}
