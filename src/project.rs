//! On-disk project files.
//!
//! A project file is a JSON envelope:
//!
//! ```json
//! { "version": 1, "exam": { "title": "..." }, "sections": [ ... ] }
//! ```
//!
//! Questions carry a `"type"` tag (`regular`, `or`, `mcq`, `mixed`) next to
//! their `text`, `diagram_path` and `table` fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Document, Exam, Section};

/// Current project file format version.
pub const PROJECT_VERSION: u32 = 1;

/// File extension used for project files.
pub const PROJECT_EXTENSION: &str = "json";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    exam: &'a Exam,
    sections: &'a [Section],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    #[serde(default)]
    exam: Exam,
    #[serde(default)]
    sections: Vec<Section>,
}

/// Serialize a paper into a project file string.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let envelope = EnvelopeRef {
        version: PROJECT_VERSION,
        exam: &doc.exam,
        sections: &doc.sections,
    };

    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&envelope)?,
        JsonFormat::Compact => serde_json::to_string(&envelope)?,
    };
    Ok(json)
}

/// Parse a project file string.
pub fn from_json(json: &str) -> Result<Document> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if envelope.version == 0 || envelope.version > PROJECT_VERSION {
        return Err(Error::UnsupportedVersion(envelope.version));
    }

    Ok(Document {
        exam: envelope.exam,
        sections: envelope.sections,
    })
}

/// Write a paper to a project file.
pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(doc, JsonFormat::Pretty)?;
    fs::write(path, json).map_err(|source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Saved project to {}", path.display());
    Ok(())
}

/// Read a paper from a project file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let doc = from_json(&json)?;
    log::debug!(
        "Loaded project {} ({} sections)",
        path.display(),
        doc.section_count()
    );
    Ok(doc)
}
