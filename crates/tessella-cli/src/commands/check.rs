use anyhow::anyhow;
use serde::Serialize;
use tessella_addressing::{Address, RemoteUrl, resolve};
use tessella_lint::{is_allowed_bucket, is_allowed_epsg, is_allowed_product, is_allowed_region};
use tracing::{debug, info};
use url::Url;

use crate::cli::{CheckArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::render_check_report;

/// Outcome of the dataset checks for one target.
#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    pub(crate) target: String,
    pub(crate) target_kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) epsg: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) region: Option<String>,
}

pub(crate) fn handle_check(args: &CheckArgs, format: OutputFormat) -> CliResult<()> {
    let report = build_check_report(args)?;
    info!(target = report.target.as_str(), "dataset checks passed");
    render_check_report(&report, format)
}

fn build_check_report(args: &CheckArgs) -> CliResult<CheckReport> {
    let target = resolve(&args.target);
    debug!(target = target.as_str(), kind = target.kind(), "classified check target");

    let bucket = match &target {
        Address::Remote(url) => Some(bucket_of(url)?),
        Address::Local(_) => None,
    };
    if let Some(bucket) = &bucket
        && !is_allowed_bucket(bucket)
    {
        return Err(CliError::validation(format!(
            "bucket '{bucket}' is not an allowed bucket"
        )));
    }

    if let Some(code) = args.epsg
        && !is_allowed_epsg(code)
    {
        return Err(CliError::validation(format!(
            "EPSG code {code} is not an allowed coordinate system"
        )));
    }

    if let Some(product) = &args.product
        && !is_allowed_product(product)
    {
        return Err(CliError::validation(format!(
            "product kind '{product}' is not an allowed product"
        )));
    }

    if let Some(region) = &args.region
        && !is_allowed_region(region)
    {
        return Err(CliError::validation(format!(
            "region '{region}' is not an allowed region"
        )));
    }

    Ok(CheckReport {
        target_kind: target.kind(),
        target: target.into_string(),
        bucket,
        epsg: args.epsg,
        product: args.product.clone(),
        region: args.region.clone(),
    })
}

fn bucket_of(url: &RemoteUrl) -> CliResult<String> {
    let parsed = Url::parse(url.as_str())
        .map_err(|err| CliError::failure(anyhow!("failed to re-parse remote address: {err}")))?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| CliError::validation("remote target does not name a bucket"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_args(target: &str) -> CheckArgs {
        CheckArgs {
            target: target.to_string(),
            epsg: None,
            product: None,
            region: None,
        }
    }

    #[test]
    fn local_targets_skip_the_bucket_check() -> CliResult<()> {
        let report = build_check_report(&check_args("/stacks/output.tif"))?;
        assert_eq!(report.target_kind, "path");
        assert_eq!(report.bucket, None);
        Ok(())
    }

    #[test]
    fn remote_targets_must_name_an_allowed_bucket() -> CliResult<()> {
        let report = build_check_report(&check_args("s3://tessella-imagery/otago/tile.tif"))?;
        assert_eq!(report.target_kind, "url");
        assert_eq!(report.bucket.as_deref(), Some("tessella-imagery"));

        let err = build_check_report(&check_args("s3://someone-elses-bucket/tile.tif"))
            .expect_err("expected validation error");
        assert_eq!(err.exit_code(), 2);
        Ok(())
    }

    #[test]
    fn optional_lint_values_are_validated_exactly() {
        let mut args = check_args("/stacks/output.tif");
        args.epsg = Some(2193);
        args.product = Some("dem".to_string());
        args.region = Some("otago".to_string());
        assert!(build_check_report(&args).is_ok());

        args.epsg = Some(27700);
        let err = build_check_report(&args).expect_err("expected validation error");
        assert!(err.display_message().contains("27700"));

        args.epsg = Some(2193);
        args.product = Some("DEM".to_string());
        assert!(build_check_report(&args).is_err());
    }

    #[test]
    fn hostless_remote_targets_are_rejected() {
        let err = build_check_report(&check_args("file:///stacks/output.tif"))
            .expect_err("expected validation error");
        assert_eq!(err.exit_code(), 2);
    }
}
