use std::fs;
use std::io;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::debug;

use maa_cli::config::PipelineConfig;
use maa_cli::pipeline::{PipelineOutcome, run_pipeline, run_preview, write_csv};

use crate::cli::{CheckArgs, FieldsArgs, NormalizeArgs, ReportFormatArg};
use crate::summary::{apply_table_style, print_preview};

/// Runs the preview boundary. Returns whether validation passed.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let config = load_config(args.config.as_deref())?;
    let filename = file_name(&args.file);
    let bytes = fs::read(&args.file)
        .with_context(|| format!("read upload {}", args.file.display()))?;

    let report = run_preview(&bytes, &filename, &config)?;
    match args.format {
        ReportFormatArg::Table => print_preview(&report),
        ReportFormatArg::Json => {
            serde_json::to_writer_pretty(io::stdout().lock(), &report)
                .context("serialize preview report")?;
            println!();
        }
    }
    Ok(report.validation.pass)
}

/// Runs the full pipeline. Returns whether the upload was accepted.
pub fn run_normalize(args: &NormalizeArgs) -> Result<bool> {
    let config = load_config(args.config.as_deref())?;
    let filename = file_name(&args.file);
    let bytes = fs::read(&args.file)
        .with_context(|| format!("read upload {}", args.file.display()))?;

    match run_pipeline(&bytes, &filename, &config)? {
        PipelineOutcome::Accepted {
            dataset,
            mapping,
            clean,
        } => {
            debug!(
                mapped = mapping.mapped_count(),
                rows = dataset.height(),
                empty_rows_removed = clean.empty_rows_removed,
                duplicate_rows_removed = clean.duplicate_rows_removed,
                "upload accepted"
            );
            match &args.output {
                Some(path) => {
                    let file = fs::File::create(path)
                        .with_context(|| format!("create output file {}", path.display()))?;
                    write_csv(&dataset, file)
                        .with_context(|| format!("write normalized CSV to {}", path.display()))?;
                    eprintln!("Wrote {} rows to {}", dataset.height(), path.display());
                }
                None => {
                    write_csv(&dataset, io::stdout().lock())
                        .context("write normalized CSV to stdout")?;
                }
            }
            Ok(true)
        }
        PipelineOutcome::Rejected { validation, .. } => {
            eprintln!("Upload rejected:");
            for message in validation.messages() {
                eprintln!("- {message}");
            }
            Ok(false)
        }
    }
}

/// Lists the configured canonical fields.
pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Field", "Required", "Aliases"]);
    for field in config.fields.fields() {
        let required = if config.required.contains(&field.canonical) {
            "yes"
        } else {
            ""
        };
        table.add_row(vec![
            field.canonical.clone(),
            required.to_string(),
            field.aliases.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path),
        None => Ok(PipelineConfig::default_market_schema()),
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
