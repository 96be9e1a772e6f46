// src/cli.rs
// =============================================================================
// This file defines the command-line interfaces of both binaries using the
// `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). The `env` feature lets
// every optional flag fall back to an environment variable, which is how CI
// pipelines configure these tools.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::github::DEFAULT_API_URL;
use crate::readme::{DEFAULT_LANGUAGE, DEFAULT_MARKER};

// Arguments for `extract-readme-example`
//
// Two positional arguments are required; anything else is a usage error.
#[derive(Parser, Debug)]
#[command(
    name = "extract-readme-example",
    version,
    about = "Extract the first runnable C++ example from a README",
    long_about = "Scans a README for ```cpp fenced blocks and writes the first one that \
                  contains `int main()` to the output path, creating parent directories. \
                  Exits with status 1 if no such block exists."
)]
pub struct ExtractCli {
    /// README file to scan (e.g., README.md)
    pub readme: PathBuf,

    /// Where to write the extracted example (e.g., build/example.cpp)
    pub output: PathBuf,

    /// Language tag a fenced block must carry (matched exactly)
    #[arg(long = "lang", env = "EXTRACT_LANG", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Substring that marks a block as a complete example
    #[arg(long, env = "EXTRACT_MARKER", default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// Arguments for `github-activity`
//
// The repository is fixed; nothing is required on the command line.
#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Print open issues, pull requests and PR comments for peper0/fakeclock"
)]
pub struct ActivityCli {
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
