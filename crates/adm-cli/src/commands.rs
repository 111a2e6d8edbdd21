use anyhow::{Context, Result};
use tracing::info;

use adm_cli::pipeline::{PipelineConfig, RunSummary, run_pipeline};
use adm_model::Schema;
use adm_output::read_parquet;

use crate::cli::{InspectArgs, RunArgs};
use crate::summary::{print_inspection, print_schema};

pub fn run_etl(args: &RunArgs) -> Result<RunSummary> {
    let config = PipelineConfig::new(&args.source, &args.output)
        .with_dry_run(args.dry_run)
        .with_report_path(args.report.clone());
    run_pipeline(&config)
}

pub fn run_schema() -> Result<()> {
    print_schema(&Schema::admissions());
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let df = read_parquet(&args.path)
        .with_context(|| format!("inspect {}", args.path.display()))?;
    info!(
        path = %args.path.display(),
        rows = df.height(),
        columns = df.width(),
        "read parquet file"
    );
    print_inspection(&args.path, &df);
    Ok(())
}
