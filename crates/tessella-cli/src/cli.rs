//! Argument parsing and command dispatch for the Tessella CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::commands::{handle_check, handle_convert, handle_copy};
use crate::error::CliResult;
use crate::logging;

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    logging::init();

    let command = command_label(&cli.command);
    debug!(command, "dispatching command");

    match dispatch(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn dispatch(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Copy(args) => handle_copy(args, cli.output),
        Command::Convert(args) => handle_convert(&args, cli.output),
        Command::Check(args) => handle_check(&args, cli.output),
    }
}

#[derive(Parser)]
#[command(
    name = "tessella",
    about = "Imagery pipeline CLI for typed addressing and batch copy actions"
)]
struct Cli {
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        env = "TESSELLA_OUTPUT",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Copy(CopyArgs),
    Convert(ConvertArgs),
    Check(CheckArgs),
}

#[derive(Args, Default)]
pub(crate) struct CopyArgs {
    #[arg(
        value_parser = parse_copy_pair,
        help = "Source/target pairs as SOURCE=TARGET"
    )]
    pub(crate) pairs: Vec<CopyPairArg>,
    #[arg(long, help = "JSON manifest file holding additional source/target entries")]
    pub(crate) manifest: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ConvertArgs {
    #[arg(help = "Raster to convert")]
    pub(crate) input: String,
    #[arg(help = "Destination for the converted raster")]
    pub(crate) output: String,
    #[arg(
        long,
        env = "TESSELLA_RESAMPLING",
        help = "Resampling method forwarded to the warp tool"
    )]
    pub(crate) resampling: String,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    #[arg(help = "Address of the dataset to check")]
    pub(crate) target: String,
    #[arg(long, help = "EPSG code the dataset is delivered in")]
    pub(crate) epsg: Option<u32>,
    #[arg(long, help = "Product kind the dataset publishes")]
    pub(crate) product: Option<String>,
    #[arg(long, help = "Administrative region the dataset is attributed to")]
    pub(crate) region: Option<String>,
}

/// One SOURCE=TARGET pair supplied on the command line.
#[derive(Clone, Debug)]
pub(crate) struct CopyPairArg {
    pub(crate) source: String,
    pub(crate) target: String,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Copy(_) => "copy",
        Command::Convert(_) => "convert",
        Command::Check(_) => "check",
    }
}

fn parse_copy_pair(value: &str) -> Result<CopyPairArg, String> {
    let (source, target) = value
        .split_once('=')
        .ok_or_else(|| "expected format SOURCE=TARGET".to_string())?;
    if source.is_empty() || target.is_empty() {
        return Err("source and target must not be empty".to_string());
    }
    Ok(CopyPairArg {
        source: source.to_string(),
        target: target.to_string(),
    })
}
