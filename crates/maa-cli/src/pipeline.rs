//! Pipeline orchestration for the two upload boundaries: full
//! normalization and the read-only preview. Stages run strictly in order:
//! read, clean, normalize, standardize (optional), validate. Only the
//! reader can fail; a failing validation is an outcome, not an error.

use std::io::Write;

use serde::Serialize;
use tracing::info_span;

use maa_ingest::read_dataset;
use maa_map::normalize;
use maa_model::{CellValue, CloseMatch, Dataset, MappingLog, ValidationResult};
use maa_transform::{CleanStats, clean, standardize_region_codes};
use maa_validate::validate;

use crate::config::PipelineConfig;

/// Maximum sample values carried per field in a preview report.
const PREVIEW_SAMPLES: usize = 3;

/// Result of a full pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Dataset normalized and validated; ready for downstream use.
    Accepted {
        dataset: Dataset,
        mapping: MappingLog,
        clean: CleanStats,
    },
    /// Required fields were missing or empty; the upload should be
    /// rejected with the listed reasons.
    Rejected {
        validation: ValidationResult,
        mapping: MappingLog,
    },
}

/// Runs the full pipeline over an upload.
pub fn run_pipeline(
    bytes: &[u8],
    filename: &str,
    config: &PipelineConfig,
) -> maa_ingest::Result<PipelineOutcome> {
    let span = info_span!("pipeline", filename);
    let _guard = span.enter();

    let raw = read_dataset(bytes, filename)?;
    let (cleaned, clean_stats) = clean(&raw);
    let (normalized, mapping) = normalize(&cleaned, &config.fields);
    let normalized = apply_region_codes(normalized, config);
    let validation = validate(&normalized, &config.required);

    if validation.pass {
        Ok(PipelineOutcome::Accepted {
            dataset: normalized,
            mapping,
            clean: clean_stats,
        })
    } else {
        Ok(PipelineOutcome::Rejected {
            validation,
            mapping,
        })
    }
}

/// One canonical field's resolution in a preview report.
#[derive(Debug, Clone, Serialize)]
pub struct FieldPreview {
    pub canonical: String,
    pub source: Option<String>,
    pub closest: Option<CloseMatch>,
    pub required: bool,
    /// Up to three non-missing values, rendered as text.
    pub samples: Vec<String>,
}

/// Full diagnostic payload for the interactive "will this file work" check.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub filename: String,
    pub source_columns: Vec<String>,
    pub rows_read: usize,
    pub rows_after_cleaning: usize,
    pub clean: CleanStats,
    pub fields: Vec<FieldPreview>,
    pub validation: ValidationResult,
}

/// Runs the pipeline stages without committing to anything downstream and
/// returns the full diagnostic payload.
pub fn run_preview(
    bytes: &[u8],
    filename: &str,
    config: &PipelineConfig,
) -> maa_ingest::Result<PreviewReport> {
    let span = info_span!("preview", filename);
    let _guard = span.enter();

    let raw = read_dataset(bytes, filename)?;
    let (cleaned, clean_stats) = clean(&raw);
    let (normalized, mapping) = normalize(&cleaned, &config.fields);
    let normalized = apply_region_codes(normalized, config);
    let validation = validate(&normalized, &config.required);

    let fields = mapping
        .entries
        .iter()
        .map(|entry| {
            let samples = normalized
                .column_index(&entry.canonical)
                .map(|index| {
                    normalized
                        .column_values(index)
                        .filter_map(CellValue::render)
                        .take(PREVIEW_SAMPLES)
                        .collect::<Vec<String>>()
                })
                .unwrap_or_default();
            FieldPreview {
                canonical: entry.canonical.clone(),
                source: entry.source.clone(),
                closest: entry.closest.clone(),
                required: config.required.contains(&entry.canonical),
                samples,
            }
        })
        .collect();

    Ok(PreviewReport {
        filename: filename.to_string(),
        source_columns: raw.columns.clone(),
        rows_read: raw.height(),
        rows_after_cleaning: cleaned.height(),
        clean: clean_stats,
        fields,
        validation,
    })
}

fn apply_region_codes(dataset: Dataset, config: &PipelineConfig) -> Dataset {
    match &config.region_column {
        Some(column) => standardize_region_codes(&dataset, column, &config.region_codes),
        None => dataset,
    }
}

/// Writes a dataset as CSV, missing cells as empty fields.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(&dataset.columns)?;
    for row in &dataset.rows {
        let record: Vec<String> = row
            .cells
            .iter()
            .map(|cell| cell.render().unwrap_or_default())
            .collect();
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}
