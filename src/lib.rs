// src/lib.rs
// =============================================================================
// Shared library behind the two fakeclock maintenance binaries:
//
// - extract-readme-example: copies the first runnable C++ sample out of a
//   README so CI can compile it
// - github-activity: prints open issues, pull requests and PR comments for
//   the fakeclock repository
//
// The two tools share nothing but the ambient plumbing (CLI definitions and
// logging setup).
// =============================================================================

pub mod cli;
pub mod github;
pub mod logging;
pub mod readme;
