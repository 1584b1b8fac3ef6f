use serde::Serialize;
use tessella_addressing::resolve;
use tessella_raster::{ResamplingMethod, warp_args};
use tracing::{debug, info};

use crate::cli::{ConvertArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::render_convert_plan;

/// External warp tool the planned invocation targets.
const WARP_TOOL: &str = "gdalwarp";

/// Planned external-tool invocation for one raster conversion.
#[derive(Debug, Serialize)]
pub(crate) struct ConvertPlan {
    pub(crate) input: String,
    pub(crate) input_kind: &'static str,
    pub(crate) output: String,
    pub(crate) output_kind: &'static str,
    pub(crate) resampling: ResamplingMethod,
    pub(crate) command: Vec<String>,
}

pub(crate) fn handle_convert(args: &ConvertArgs, format: OutputFormat) -> CliResult<()> {
    let plan = build_convert_plan(args)?;
    info!(resampling = %plan.resampling, "planned raster conversion");
    render_convert_plan(&plan, format)
}

fn build_convert_plan(args: &ConvertArgs) -> CliResult<ConvertPlan> {
    let method = args.resampling.parse::<ResamplingMethod>().map_err(|_| {
        CliError::validation(format!(
            "unsupported resampling method '{}'; supported methods: {}",
            args.resampling,
            supported_methods()
        ))
    })?;

    let input = resolve(&args.input);
    let output = resolve(&args.output);
    debug!(input = input.as_str(), kind = input.kind(), "classified convert input");
    debug!(output = output.as_str(), kind = output.kind(), "classified convert output");

    let mut command = vec![WARP_TOOL.to_string()];
    command.extend(warp_args(input.as_str(), output.as_str(), method));

    Ok(ConvertPlan {
        input_kind: input.kind(),
        input: input.into_string(),
        output_kind: output.kind(),
        output: output.into_string(),
        resampling: method,
        command,
    })
}

fn supported_methods() -> String {
    ResamplingMethod::ALL
        .iter()
        .map(|method| method.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
