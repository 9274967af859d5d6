//! Batch orchestration: template loading, participant fan-out across blocking
//! worker tasks, and archive assembly. Records share nothing but the
//! read-only template, so they render concurrently; the archive is only
//! written after every record has finished, so a failed record never leaves a
//! partial archive behind.

pub mod rows;

use image::RgbImage;
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::render::{fonts::FontSet, render_certificate, RenderError, RenderedCertificate};
use crate::storage::clean_filename;
use rows::ParticipantRecord;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("certificate template not found - upload a template first")]
    MissingTemplate,
    #[error("template is not a decodable image: {0}")]
    TemplateDecode(#[from] image::ImageError),
    #[error("template has a zero dimension")]
    EmptyTemplate,
    #[error("participant table is malformed: {0}")]
    Table(#[source] csv::Error),
    #[error("participant table must have columns: name, course, date")]
    MissingColumns,
    #[error("participant table line {line} has an empty required field")]
    EmptyField { line: usize },
    #[error("participant table has no rows")]
    NoRows,
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("render worker failed: {0}")]
    Worker(String),
    #[error("archive assembly failed: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BatchError {
    /// Input-class errors are the caller's to fix; everything else is ours.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            BatchError::MissingTemplate
                | BatchError::TemplateDecode(_)
                | BatchError::EmptyTemplate
                | BatchError::Table(_)
                | BatchError::MissingColumns
                | BatchError::EmptyField { .. }
                | BatchError::NoRows
        )
    }
}

/// Reads and decodes the uploaded template, rejecting anything the renderer
/// could not draw on.
pub fn load_template(path: &Path) -> Result<RgbImage, BatchError> {
    if !path.exists() {
        return Err(BatchError::MissingTemplate);
    }
    let bytes = std::fs::read(path)?;
    let template = image::load_from_memory(&bytes)?.to_rgb8();
    if template.width() == 0 || template.height() == 0 {
        return Err(BatchError::EmptyTemplate);
    }
    Ok(template)
}

/// Renders every record against the shared template and bundles all
/// artifacts into one in-memory ZIP archive.
///
/// One blocking worker task per record; the first failure cancels tasks that
/// have not started yet and fails the batch (abort-batch policy). Outputs
/// are re-sequenced by input row index, so the archive order is
/// deterministic regardless of completion order.
pub async fn run(
    template: Arc<RgbImage>,
    fonts: Arc<FontSet>,
    records: Vec<ParticipantRecord>,
) -> Result<Vec<u8>, BatchError> {
    if template.width() == 0 || template.height() == 0 {
        return Err(BatchError::EmptyTemplate);
    }

    let count = records.len();
    let mut workers = JoinSet::new();
    for (idx, record) in records.into_iter().enumerate() {
        let template = Arc::clone(&template);
        let fonts = Arc::clone(&fonts);
        workers.spawn_blocking(move || {
            let rendered =
                render_certificate(&template, &fonts, &record.name, &record.course, &record.date)?;
            Ok::<_, RenderError>((idx, record, rendered))
        });
    }

    let mut outputs: Vec<(usize, ParticipantRecord, RenderedCertificate)> =
        Vec::with_capacity(count);
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(Ok(output)) => outputs.push(output),
            Ok(Err(e)) => {
                workers.abort_all();
                return Err(BatchError::Render(e));
            }
            Err(e) => {
                workers.abort_all();
                return Err(BatchError::Worker(e.to_string()));
            }
        }
    }
    outputs.sort_by_key(|(idx, _, _)| *idx);

    let mut archive = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut archive));
        let options = zip::write::SimpleFileOptions::default().unix_permissions(0o644);
        for (idx, record, rendered) in &outputs {
            let base = archive_base_name(*idx, &record.name);
            zip.start_file(format!("certificates/{}.png", base), options)?;
            zip.write_all(&rendered.png)?;
            zip.start_file(format!("certificates/{}.pdf", base), options)?;
            zip.write_all(&rendered.pdf)?;
        }
        zip.finish()?;
    }

    Ok(archive)
}

/// Archive entry stem: 1-based row sequence + cleaned participant name, so
/// duplicate names never collide.
pub fn archive_base_name(idx: usize, name: &str) -> String {
    format!("{:03}_{}", idx + 1, clean_filename(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_names_are_distinct_for_duplicate_participants() {
        let a = archive_base_name(0, "Jane Doe");
        let b = archive_base_name(1, "Jane Doe");
        assert_eq!(a, "001_Jane_Doe");
        assert_eq!(b, "002_Jane_Doe");
        assert_ne!(a, b);
    }
}
