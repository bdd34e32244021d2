//! Word-processor document exporter.
//!
//! Word processors open HTML saved under a `.doc` name, so the payload is the
//! same markup the HTML exporter writes.

use crate::error::Result;
use crate::model::Document;
use crate::render::to_html;

use super::{ExportFormat, ExportOptions, Exporter};

/// Writes the rendered markup as a double-clickable word-processor file.
#[derive(Debug, Clone, Default)]
pub struct WordExporter {
    _private: (),
}

impl WordExporter {
    /// Create a new Word exporter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Exporter for WordExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["doc", "docx"]
    }

    fn name(&self) -> &str {
        "word"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Word
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<Vec<u8>> {
        Ok(to_html(doc, &options.render).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_exporter_extensions() {
        let exporter = WordExporter::new();
        assert_eq!(exporter.supported_extensions(), &["doc", "docx"]);
        assert!(exporter.supports_extension("DOCX"));
        assert!(!exporter.supports_extension("html"));
        assert_eq!(exporter.format(), ExportFormat::Word);
    }
}
