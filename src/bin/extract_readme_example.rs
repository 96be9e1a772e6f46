// src/bin/extract_readme_example.rs
// =============================================================================
// Entry point of `extract-readme-example`.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Extract the first C++ block containing `int main()`
// 3. Exit with proper code (0 = written, 1 = usage error or no example)
//
// Usage: extract-readme-example README.md build/example.cpp
// =============================================================================

use clap::error::ErrorKind;
use clap::Parser;

use fakeclock_scripts::cli::ExtractCli;
use fakeclock_scripts::logging;
use fakeclock_scripts::readme::{self, ExtractOptions};

fn main() {
    let cli = match ExtractCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logging::init(cli.verbose);

    std::process::exit(run(cli));
}

// Returns:
//   0 = example written
//   1 = nothing usable in the README, or an I/O error
fn run(cli: ExtractCli) -> i32 {
    let options = ExtractOptions {
        language: cli.language,
        marker: cli.marker,
    };

    match readme::extract_example(&cli.readme, &cli.output, &options) {
        Ok(path) => {
            tracing::info!(output = %path.display(), "example extracted");
            0
        }
        Err(e) if e.is_not_found() => {
            eprintln!("{}", e);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
