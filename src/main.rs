//! folio - render a personal portfolio page from JSON content

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = folio::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
