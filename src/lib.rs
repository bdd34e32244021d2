//! # exampaper
//!
//! Exam paper document model and printable HTML rendering engine.
//!
//! A paper is exam metadata plus an ordered list of sections, each holding
//! questions of four variants: regular, alternative ("OR"), multiple-choice
//! and mixed. The renderer turns that tree into one self-contained, styled
//! HTML document that previewers, printers and exporters consume verbatim.
//!
//! ## Quick Start
//!
//! ```
//! use exampaper::{render, Document, Exam, Question, Section};
//!
//! let doc = Document::new(Exam::new("Unit Test").with_subject("Biology"))
//!     .with_section(
//!         Section::new("Section A")
//!             .with_question(Question::mcq("Which organelle makes ATP?", [
//!                 "Nucleus",
//!                 "Mitochondrion",
//!             ])),
//!     );
//!
//! let options = render::RenderOptions::default();
//! let html = render::to_html(&doc, &options);
//! assert!(html.contains("(b) Mitochondrion"));
//! ```
//!
//! ## Features
//!
//! - **Deterministic rendering**: pure function, no I/O, safe to call from
//!   many threads
//! - **Stable markup contract**: fixed class names for downstream consumers
//! - **Project files**: versioned JSON envelope
//! - **Exporters**: HTML and word-processor files, batch export in parallel

pub mod error;
pub mod export;
pub mod model;
pub mod project;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    ExportFormat, ExportJob, ExportOptions, ExportResult, Exporter, ExporterRegistry,
};
pub use model::{
    AnswerKeyEntry, DataTable, Document, Exam, Orientation, Question, QuestionKind, Section,
};
pub use project::JsonFormat;
pub use render::{PaperStats, RenderOptions, RenderResult};

use std::path::Path;

/// Render a paper to HTML with default options.
///
/// The page orientation is taken from the exam metadata.
///
/// # Example
///
/// ```
/// use exampaper::{render_html, Document, Exam};
///
/// let html = render_html(&Document::new(Exam::new("Quiz")));
/// assert!(html.contains("<h1>Quiz</h1>"));
/// ```
pub fn render_html(doc: &Document) -> String {
    render::to_html(doc, &RenderOptions::for_exam(&doc.exam))
}

/// Load a paper from a project file.
///
/// # Example
///
/// ```no_run
/// use exampaper::load_project;
///
/// let doc = load_project("paper.json").unwrap();
/// println!("Questions: {}", doc.total_questions());
/// ```
pub fn load_project<P: AsRef<Path>>(path: P) -> Result<Document> {
    project::load(path)
}

/// Save a paper to a project file.
pub fn save_project<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    project::save(doc, path)
}

/// Export a paper, picking the exporter from the destination extension.
///
/// # Example
///
/// ```no_run
/// use exampaper::{export_file, load_project, ExportOptions};
///
/// let doc = load_project("paper.json")?;
/// export_file(&doc, "paper.doc", &ExportOptions::default())?;
/// # Ok::<(), exampaper::Error>(())
/// ```
pub fn export_file<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &ExportOptions,
) -> Result<ExportResult> {
    ExporterRegistry::with_defaults().export(doc, path.as_ref(), options)
}

/// Builder for loading and rendering exam papers.
///
/// # Example
///
/// ```no_run
/// use exampaper::ExamPaper;
///
/// let html = ExamPaper::new()
///     .with_font_family("Georgia")
///     .with_font_size(11)
///     .landscape()
///     .open("paper.json")?
///     .to_html();
/// # Ok::<(), exampaper::Error>(())
/// ```
pub struct ExamPaper {
    render_options: Option<RenderOptions>,
    font_family: Option<String>,
    font_size: Option<u32>,
    orientation: Option<Orientation>,
}

impl ExamPaper {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: None,
            font_family: None,
            font_size: None,
            orientation: None,
        }
    }

    /// Start from explicit render options instead of the defaults.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = Some(options);
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Force landscape pages.
    pub fn landscape(mut self) -> Self {
        self.orientation = Some(Orientation::Landscape);
        self
    }

    /// Force portrait pages.
    pub fn portrait(mut self) -> Self {
        self.orientation = Some(Orientation::Portrait);
        self
    }

    /// Load a project file and return a result wrapper.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<PaperResult> {
        let document = project::load(path)?;
        Ok(self.wrap(document))
    }

    /// Parse project file contents.
    pub fn parse_json(self, json: &str) -> Result<PaperResult> {
        let document = project::from_json(json)?;
        Ok(self.wrap(document))
    }

    /// Wrap an in-memory document.
    pub fn wrap(self, document: Document) -> PaperResult {
        let render_options = self.resolve_options(&document.exam);
        PaperResult {
            document,
            render_options,
        }
    }

    /// Explicit settings win; anything unset falls back to the exam's
    /// orientation and the default font.
    fn resolve_options(&self, exam: &Exam) -> RenderOptions {
        let mut options = self
            .render_options
            .clone()
            .unwrap_or_else(|| RenderOptions::for_exam(exam));
        if let Some(ref family) = self.font_family {
            options.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            options.font_size = size;
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation;
        }
        options
    }
}

impl Default for ExamPaper {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded paper together with the options to render it with.
pub struct PaperResult {
    /// The paper
    pub document: Document,
    render_options: RenderOptions,
}

impl PaperResult {
    /// Render to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to HTML with statistics.
    pub fn to_html_with_stats(&self) -> RenderResult {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Render to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Serialize back to a project file string.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        project::to_json(&self.document, format)
    }

    /// Export to a file, picking the exporter from the extension.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<ExportResult> {
        let options = ExportOptions::new().with_render_options(self.render_options.clone());
        export_file(&self.document, path, &options)
    }

    /// Options used for rendering.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape_doc() -> Document {
        Document::new(Exam::new("Wide").with_orientation(Orientation::Landscape))
            .with_section(Section::new("A").with_question(Question::regular("Q")))
    }

    #[test]
    fn test_render_html_uses_exam_orientation() {
        let html = render_html(&landscape_doc());
        assert!(html.contains("size: A4 landscape;"));
    }

    #[test]
    fn test_builder_default_follows_exam() {
        let result = ExamPaper::new().wrap(landscape_doc());
        assert!(result.render_options().orientation.is_landscape());
        assert_eq!(result.render_options().font_size, 12);
    }

    #[test]
    fn test_builder_overrides() {
        let result = ExamPaper::new()
            .with_font_family("Arial")
            .with_font_size(10)
            .portrait()
            .wrap(landscape_doc());

        let options = result.render_options();
        assert_eq!(options.font_family, "Arial");
        assert_eq!(options.font_size, 10);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert!(result.to_html().contains("font-size:10pt;"));
    }

    #[test]
    fn test_builder_with_render_options() {
        let result = ExamPaper::new()
            .with_render_options(RenderOptions::new().with_font_size(16))
            .landscape()
            .wrap(Document::default());
        assert_eq!(result.render_options().font_size, 16);
        assert!(result.render_options().orientation.is_landscape());
    }

    #[test]
    fn test_builder_parse_json() {
        let result = ExamPaper::new()
            .parse_json(r#"{"version":1,"exam":{"title":"From JSON"},"sections":[]}"#)
            .unwrap();
        assert_eq!(result.document().exam.title, "From JSON");
        assert!(result.to_text().starts_with("From JSON"));

        assert!(ExamPaper::new().parse_json("{}").is_err());
    }

    #[test]
    fn test_export_file_unsupported_extension() {
        let result = export_file(&landscape_doc(), "paper.pdf", &ExportOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedExtension(_))));
    }
}
