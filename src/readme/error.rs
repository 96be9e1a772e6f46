use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid fence pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No {} code blocks found in {}", display_language(language), path.display())]
    NoBlocks { language: String, path: PathBuf },

    #[error("No complete examples with {marker} found in {}", path.display())]
    NoEntryPoint { marker: String, path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ExtractError {
    /// True when the README was read fine but held nothing usable
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoBlocks { .. } | Self::NoEntryPoint { .. })
    }
}

// "cpp" is spelled the way people search CI logs for it
fn display_language(language: &str) -> &str {
    match language {
        "cpp" => "C++",
        other => other,
    }
}
