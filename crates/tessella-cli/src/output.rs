//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use serde::Serialize;
use tessella_actions::BatchAction;
use tessella_addressing::JsonText;

use crate::cli::OutputFormat;
use crate::commands::{CheckReport, ConvertPlan};
use crate::error::{CliError, CliResult};

pub(crate) fn render_copy_action(action: &BatchAction, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(action),
        OutputFormat::Table => {
            let manifest = action.manifest();
            println!("action: {}", action.kind());
            println!("{:<56} TARGET", "SOURCE");
            for entry in manifest {
                println!("{:<56} {}", entry.source, entry.target);
            }
            println!("entries: {}", manifest.len());
            Ok(())
        }
    }
}

pub(crate) fn render_convert_plan(plan: &ConvertPlan, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(plan),
        OutputFormat::Table => {
            println!("input: {} ({})", plan.input, plan.input_kind);
            println!("output: {} ({})", plan.output, plan.output_kind);
            println!("resampling: {}", plan.resampling);
            println!("command: {}", plan.command.join(" "));
            Ok(())
        }
    }
}

pub(crate) fn render_check_report(report: &CheckReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Table => {
            println!("target: {} ({})", report.target, report.target_kind);
            if let Some(bucket) = &report.bucket {
                println!("bucket: {bucket}");
            }
            if let Some(code) = report.epsg {
                println!("epsg: {code}");
            }
            if let Some(product) = &report.product {
                println!("product: {product}");
            }
            if let Some(region) = &report.region {
                println!("region: {region}");
            }
            println!("result: ok");
            Ok(())
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> CliResult<()> {
    let text = JsonText::encode_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}
