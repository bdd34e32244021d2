//! Exporter module providing a plugin architecture for output files.
//!
//! Exporters turn a rendered paper into bytes and write them to disk. The
//! registry maps file extensions to exporters and dispatches on the
//! destination path.
//!
//! # Example
//!
//! ```no_run
//! use exampaper::export::{ExportOptions, ExporterRegistry};
//! use std::path::Path;
//!
//! fn main() -> exampaper::Result<()> {
//!     let doc = exampaper::load_project("paper.json")?;
//!     let registry = ExporterRegistry::with_defaults();
//!     let result = registry.export(&doc, Path::new("paper.html"), &ExportOptions::default())?;
//!     println!("{} bytes written", result.bytes_written);
//!     Ok(())
//! }
//! ```

mod batch;
mod html;
mod naming;
mod word;

pub use batch::{export_batch, export_batch_with_progress, ExportJob};
pub use html::HtmlExporter;
pub use naming::{default_filename, ensure_extension, sanitize_filename, unique_paths};
pub use word::WordExporter;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::RenderOptions;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options for exporting a paper.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Run [`Document::validate`] before writing
    pub validate: bool,
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable or disable validation before export.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            validate: true,
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Standalone HTML page
    #[default]
    Html,

    /// Word-processor document carrying the HTML markup as its payload
    Word,
}

impl ExportFormat {
    /// Preferred file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Word => "doc",
        }
    }

    /// MIME type of the written file.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::Word => "application/msword",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Word => "Word",
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Destination that was written
    pub path: PathBuf,

    /// Number of bytes written
    pub bytes_written: usize,

    /// Format of the written file
    pub format: ExportFormat,

    /// MIME type of the written file
    pub mime_type: &'static str,
}

impl ExportResult {
    /// Create a new export result.
    pub fn new(path: PathBuf, bytes_written: usize, format: ExportFormat) -> Self {
        Self {
            path,
            bytes_written,
            format,
            mime_type: format.mime_type(),
        }
    }
}

/// Write bytes to an export destination, mapping failures to
/// [`Error::WriteFailed`].
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Trait for paper exporters.
///
/// Implement this trait to add a new output file type.
pub trait Exporter: Send + Sync {
    /// Get the supported file extensions for this exporter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["html"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// Format written by this exporter.
    fn format(&self) -> ExportFormat;

    /// Produce the file contents.
    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<Vec<u8>>;

    /// Render and write the paper to `path`.
    fn export(&self, doc: &Document, path: &Path, options: &ExportOptions) -> Result<ExportResult> {
        if options.validate {
            if let Err(e) = doc.validate() {
                log::warn!("Refusing to export {}: {}", path.display(), e);
                return Err(e);
            }
        }

        let bytes = self.render(doc, options)?;
        write_output(path, &bytes)?;
        log::debug!(
            "Exported {} ({} bytes) with {} exporter",
            path.display(),
            bytes.len(),
            self.name()
        );
        Ok(ExportResult::new(path.to_path_buf(), bytes.len(), self.format()))
    }

    /// Check if this exporter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for exporters.
///
/// The registry maps file extensions to exporters and provides
/// convenient methods for exporting papers.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn Exporter>>,
    by_name: HashMap<String, Arc<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the HTML and Word exporters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlExporter::new()));
        registry.register(Arc::new(WordExporter::new()));
        registry
    }

    /// Register an exporter.
    ///
    /// The exporter will be registered for all its supported extensions.
    pub fn register(&mut self, exporter: Arc<dyn Exporter>) {
        for ext in exporter.supported_extensions() {
            self.exporters.insert(ext.to_lowercase(), exporter.clone());
        }
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn Exporter>> {
        self.exporters.get(&ext.to_lowercase()).cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Exporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Get the first exporter writing the given format.
    pub fn get_by_format(&self, format: ExportFormat) -> Option<Arc<dyn Exporter>> {
        self.get_by_extension(format.extension())
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.exporters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.exporters.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Find the exporter for a destination path.
    pub fn exporter_for(&self, path: &Path) -> Result<Arc<dyn Exporter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::MissingExtension(path.to_path_buf()))?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))
    }

    /// Export a paper using the exporter registered for the path's extension.
    pub fn export(
        &self,
        doc: &Document,
        path: &Path,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        self.exporter_for(path)?.export(doc, path, options)
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
