// src/readme/mod.rs
// =============================================================================
// This module pulls runnable code samples out of README files.
//
// Submodules:
// - extract: finds fenced blocks, picks the example, writes it to disk
// - error: what can go wrong while doing that
// =============================================================================

mod error;
mod extract;

pub use error::ExtractError;
pub use extract::{
    extract_example, find_fenced_blocks, normalize_newlines, select_example, ExtractOptions,
    FencedBlock, DEFAULT_LANGUAGE, DEFAULT_MARKER,
};
