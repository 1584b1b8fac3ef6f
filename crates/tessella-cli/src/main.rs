//! Thin entrypoint delegating to [`tessella_cli::run`].

use std::process;

fn main() {
    let exit_code = tessella_cli::run();
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
