//! Report command implementation

use std::io;
use std::path::Path;

use lintlens_core::{OutputFormat, ReportConfig, ResultsView, View, aggregate, input, render};
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info};

use crate::cli::Cli;

pub fn run_report(
    cli: &Cli,
    input_path: Option<&Path>,
    view: Option<View>,
    format: Option<OutputFormat>,
    select: Option<usize>,
) -> Result<bool> {
    let config = if let Some(ref path) = cli.config {
        ReportConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    let results = match input_path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading results from {}", path.display());
            input::from_path(path)
        }
        _ => {
            debug!("Reading results from stdin");
            input::from_reader(io::stdin().lock())
        }
    }
    .into_diagnostic()?;

    let summary = aggregate(&results);

    let mut results_view = ResultsView::new();
    results_view.regenerate(&results);
    if let Some(index) = select {
        results_view.select(index).into_diagnostic()?;
    }

    let view = view.unwrap_or(config.view);
    let output = match format.unwrap_or(config.format) {
        OutputFormat::Text => render::text(
            &summary,
            results_view.entries(),
            results_view.selection(),
            &config,
            view,
        ),
        OutputFormat::Json => render::json(
            &summary,
            results_view.entries(),
            results_view.selection(),
            &config,
            view,
        )
        .into_diagnostic()?,
    };

    println!("{}", output);

    Ok(summary.has_errors())
}

pub fn find_config() -> Result<ReportConfig> {
    if let Some(path) = ReportConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ReportConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(ReportConfig::new())
}
