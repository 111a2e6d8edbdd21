//! Admissions pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Extract**: read the source CSV with every cell as text
//! 2. **Transform**: project, coerce, and derive length-of-stay fields
//! 3. **Validate**: run read-only data-quality checks
//! 4. **Load**: write the curated frame as Parquet
//!
//! Fatal errors abort the run; coercion failures and validation warnings
//! are reported in the [`RunSummary`].

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use adm_ingest::extract;
use adm_model::{CoercionReport, Schema};
use adm_output::{LoadOptions, LoadSummary, load};
use adm_transform::{TransformOutput, transform};
use adm_validate::{ValidationReport, validate};

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Skip the load stage.
    pub dry_run: bool,
    /// Where to write a JSON copy of the [`RunSummary`].
    pub report_path: Option<PathBuf>,
    pub load_options: LoadOptions,
    pub schema: Schema,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("admissions.csv"),
            destination: PathBuf::from("admissions.parquet"),
            dry_run: false,
            report_path: None,
            load_options: LoadOptions::default(),
            schema: Schema::admissions(),
        }
    }
}

impl PipelineConfig {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_report_path(mut self, path: Option<PathBuf>) -> Self {
        self.report_path = path;
        self
    }

    #[must_use]
    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }
}

/// Wall-clock time per stage, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageDurations {
    pub extract_ms: u64,
    pub transform_ms: u64,
    pub validate_ms: u64,
    pub load_ms: u64,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub source: PathBuf,
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub coercion: CoercionReport,
    pub validation: ValidationReport,
    /// `None` for dry runs.
    pub load: Option<LoadSummary>,
    pub durations: StageDurations,
}

impl RunSummary {
    pub fn has_warnings(&self) -> bool {
        !self.validation.is_clean()
    }
}

/// Run extract, transform, validate, and load in order.
///
/// # Errors
///
/// Source access and format failures, a schema column missing from the
/// source, and destination write failures. Each carries the stage and path
/// as context.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunSummary> {
    let run_span = info_span!(
        "pipeline",
        source = %config.source.display(),
        destination = %config.destination.display()
    );
    let _run_guard = run_span.enter();
    let run_start = Instant::now();
    let mut durations = StageDurations::default();

    // Stage 1: Extract
    let start = Instant::now();
    let raw = info_span!("extract")
        .in_scope(|| extract(&config.source))
        .with_context(|| format!("extract {}", config.source.display()))?;
    durations.extract_ms = elapsed_ms(start);
    let (input_rows, input_columns) = (raw.height(), raw.width());
    info!(
        rows = input_rows,
        columns = input_columns,
        duration_ms = durations.extract_ms,
        "extract complete"
    );

    // Stage 2: Transform
    let start = Instant::now();
    let TransformOutput {
        frame: mut curated,
        coercion,
    } = info_span!("transform")
        .in_scope(|| transform(&raw, &config.schema))
        .with_context(|| format!("transform {}", config.source.display()))?;
    drop(raw);
    durations.transform_ms = elapsed_ms(start);
    info!(
        rows = curated.height(),
        columns = curated.width(),
        failed_cells = coercion.total_failed_cells(),
        duration_ms = durations.transform_ms,
        "transform complete"
    );

    // Stage 3: Validate
    let start = Instant::now();
    let validation = info_span!("validate").in_scope(|| validate(&curated));
    durations.validate_ms = elapsed_ms(start);
    info!(
        warnings = validation.warning_count(),
        duration_ms = durations.validate_ms,
        "validate complete"
    );

    // Stage 4: Load
    let load_summary = if config.dry_run {
        info!("dry run, skipping load");
        None
    } else {
        let start = Instant::now();
        let summary = info_span!("load")
            .in_scope(|| load(&mut curated, &config.destination, &config.load_options))
            .with_context(|| format!("load {}", config.destination.display()))?;
        durations.load_ms = elapsed_ms(start);
        info!(
            rows = summary.rows,
            bytes = summary.bytes,
            duration_ms = durations.load_ms,
            "load complete"
        );
        Some(summary)
    };

    let summary = RunSummary {
        source: config.source.clone(),
        input_rows,
        input_columns,
        output_rows: curated.height(),
        output_columns: curated.width(),
        coercion,
        validation,
        load: load_summary,
        durations,
    };

    if let Some(path) = &config.report_path {
        write_run_report(path, &summary)
            .with_context(|| format!("write run report {}", path.display()))?;
    }

    info!(
        rows = summary.output_rows,
        warnings = summary.validation.warning_count(),
        duration_ms = elapsed_ms(run_start),
        "pipeline complete"
    );
    Ok(summary)
}

/// Write the summary as pretty-printed JSON.
pub fn write_run_report(path: &Path, summary: &RunSummary) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;
    Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
