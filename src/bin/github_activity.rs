// src/bin/github_activity.rs
// =============================================================================
// Entry point of `github-activity`.
//
// What happens here:
// 1. Parse command-line arguments using clap (none are required)
// 2. Fetch issues, pull requests and PR comments one request at a time
// 3. Print the report to stdout as it is fetched
// 4. Exit 0 when everything printed, 1 on the first failed request
// =============================================================================

use anyhow::Result;
use clap::Parser;

use fakeclock_scripts::cli::ActivityCli;
use fakeclock_scripts::github::{self, GithubClient, REPO};
use fakeclock_scripts::logging;

#[tokio::main]
async fn main() {
    let cli = ActivityCli::parse();
    logging::init(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: &ActivityCli) -> Result<()> {
    let client = GithubClient::new(&cli.api_url, REPO)?;
    tracing::debug!(repo = REPO, api = %cli.api_url, "starting report");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    github::run_report(&client, &mut out).await
}
