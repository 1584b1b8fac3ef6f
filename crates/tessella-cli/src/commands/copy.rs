use tessella_actions::{BatchAction, CopyManifestEntry, load_manifest};
use tracing::info;

use crate::cli::{CopyArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::render_copy_action;

pub(crate) fn handle_copy(args: CopyArgs, format: OutputFormat) -> CliResult<()> {
    let action = assemble_copy_action(args)?;
    info!(entries = action.manifest().len(), "assembled copy action");
    render_copy_action(&action, format)
}

/// Build the copy descriptor from manifest-file entries followed by the
/// positional pairs, preserving order within and across both sources.
fn assemble_copy_action(args: CopyArgs) -> CliResult<BatchAction> {
    let mut entries = match &args.manifest {
        Some(path) => load_manifest(path).map_err(CliError::failure)?,
        None => Vec::new(),
    };
    entries.extend(
        args.pairs
            .into_iter()
            .map(|pair| CopyManifestEntry::new(pair.source, pair.target)),
    );
    Ok(BatchAction::copy(entries))
}
