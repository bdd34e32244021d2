//! Parallel export of independent papers.

use std::collections::HashSet;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::RenderOptions;

use super::{ExportOptions, ExportResult, ExporterRegistry};

/// One paper and where to write it.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Paper to export
    pub document: Document,

    /// Destination; the extension selects the exporter
    pub output: PathBuf,

    /// Rendering options for this paper only; the batch options apply when unset
    pub render: Option<RenderOptions>,
}

impl ExportJob {
    /// Create a new export job.
    pub fn new(document: Document, output: impl Into<PathBuf>) -> Self {
        Self {
            document,
            output: output.into(),
            render: None,
        }
    }

    /// Render this paper with its own options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = Some(options);
        self
    }
}

/// Export several papers in parallel.
///
/// Each job succeeds or fails on its own; results are returned in job order.
pub fn export_batch(
    jobs: &[ExportJob],
    registry: &ExporterRegistry,
    options: &ExportOptions,
) -> Vec<Result<ExportResult>> {
    export_batch_with_progress(jobs, registry, options, |_, _| {})
}

/// Export several papers in parallel, calling `on_done` as each job finishes.
///
/// `on_done` receives the job index and its result, in completion order. A
/// job whose destination repeats an earlier job's destination fails with
/// [`Error::DuplicateDestination`] and writes nothing.
pub fn export_batch_with_progress<F>(
    jobs: &[ExportJob],
    registry: &ExporterRegistry,
    options: &ExportOptions,
    on_done: F,
) -> Vec<Result<ExportResult>>
where
    F: Fn(usize, &Result<ExportResult>) + Sync,
{
    log::debug!("Exporting {} papers", jobs.len());

    let mut seen = HashSet::new();
    let repeated: Vec<bool> = jobs
        .iter()
        .map(|job| !seen.insert(job.output.as_path()))
        .collect();

    jobs.par_iter()
        .zip(repeated.par_iter())
        .enumerate()
        .map(|(index, (job, &is_repeat))| {
            let result = if is_repeat {
                Err(Error::DuplicateDestination(job.output.clone()))
            } else {
                export_job(job, registry, options)
            };
            if let Err(ref e) = result {
                log::warn!("Skipping {}: {}", job.output.display(), e);
            }
            on_done(index, &result);
            result
        })
        .collect()
}

fn export_job(
    job: &ExportJob,
    registry: &ExporterRegistry,
    options: &ExportOptions,
) -> Result<ExportResult> {
    match &job.render {
        Some(render) => {
            let options = options.clone().with_render_options(render.clone());
            registry.export(&job.document, &job.output, &options)
        }
        None => registry.export(&job.document, &job.output, options),
    }
}
