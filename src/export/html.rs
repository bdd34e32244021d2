//! HTML file exporter.

use crate::error::Result;
use crate::model::Document;
use crate::render::to_html;

use super::{ExportFormat, ExportOptions, Exporter};

/// Writes the rendered markup as a UTF-8 HTML page.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    _private: (),
}

impl HtmlExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Exporter for HtmlExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn name(&self) -> &str {
        "html"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<Vec<u8>> {
        Ok(to_html(doc, &options.render).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Exam;

    #[test]
    fn test_html_exporter_extensions() {
        let exporter = HtmlExporter::new();
        assert_eq!(exporter.supported_extensions(), &["html", "htm"]);
        assert!(exporter.supports_extension("HTML"));
        assert!(!exporter.supports_extension("doc"));
        assert_eq!(exporter.name(), "html");
    }

    #[test]
    fn test_html_exporter_render_matches_renderer() {
        let doc = Document::new(Exam::new("Paper"));
        let options = ExportOptions::default();
        let bytes = HtmlExporter::new().render(&doc, &options).unwrap();
        assert_eq!(bytes, to_html(&doc, &options.render).into_bytes());
    }
}
