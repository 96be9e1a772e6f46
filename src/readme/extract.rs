// src/readme/extract.rs
// =============================================================================
// This module extracts a runnable code example from Markdown text.
//
// How it works:
// 1. Find every fenced block tagged with the target language:
//
//        ```cpp
//        ...code...
//        ```
//
// 2. Keep the first one (top to bottom) that contains the entry-point
//    marker, `int main()` by default
// 3. Write its text, unchanged, to the output path
//
// The tag is matched exactly and case-sensitively: ```CPP and ```cpp17 are
// other languages as far as we are concerned.
//
// Rust concepts:
// - Lifetimes: FencedBlock<'a> borrows from the README text instead of
//   copying it
// - Option<T>: "there may be no example"
// - Result<T, E>: For operations that can fail
// =============================================================================

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use super::error::ExtractError;

/// Language tag used when none is given
pub const DEFAULT_LANGUAGE: &str = "cpp";

/// Marker that identifies a complete program
pub const DEFAULT_MARKER: &str = "int main()";

/// What to look for in the README
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Fence tag, e.g. "cpp"
    pub language: String,
    /// Substring a block must contain to be selected
    pub marker: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

/// One fenced block, without its fence lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    pub text: &'a str,
}

impl FencedBlock<'_> {
    pub fn has_marker(&self, marker: &str) -> bool {
        self.text.contains(marker)
    }
}

// Finds all fenced blocks tagged with `language`, in document order
//
// The text between the newline after the opening fence and the newline
// before the closing fence is captured. The match is lazy, so each block
// ends at the first closing fence after it opens.
//
// Example:
//   content = "```cpp\nint x;\n```"
//   result  = [FencedBlock { text: "int x;" }]
pub fn find_fenced_blocks<'a>(
    content: &'a str,
    language: &str,
) -> Result<Vec<FencedBlock<'a>>, ExtractError> {
    let pattern = Regex::new(&format!(r"(?s)```{}\n(.*?)\n```", regex::escape(language)))?;

    let blocks = pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| FencedBlock { text: m.as_str() })
        .collect();

    Ok(blocks)
}

// Picks the first block containing the marker
//
// Later blocks are never looked at once a match is found, even if they
// would be "better" examples.
pub fn select_example<'a>(blocks: &[FencedBlock<'a>], marker: &str) -> Option<FencedBlock<'a>> {
    blocks.iter().copied().find(|block| block.has_marker(marker))
}

// Turns CRLF and lone CR line endings into LF
//
// READMEs checked out with autocrlf still have to match the fence pattern.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

// Reads `readme_path`, selects the example and writes it to `output_path`
//
// Nothing touches the filesystem until an example has been selected, so a
// failed run leaves neither the output file nor its parent directories
// behind.
//
// Returns: the path that was written
pub fn extract_example(
    readme_path: &Path,
    output_path: &Path,
    options: &ExtractOptions,
) -> Result<PathBuf, ExtractError> {
    let raw = fs::read_to_string(readme_path).map_err(|source| ExtractError::Read {
        path: readme_path.to_path_buf(),
        source,
    })?;
    let content = normalize_newlines(&raw);

    let blocks = find_fenced_blocks(&content, &options.language)?;
    debug!(
        readme = %readme_path.display(),
        language = %options.language,
        count = blocks.len(),
        "found fenced blocks"
    );

    if blocks.is_empty() {
        return Err(ExtractError::NoBlocks {
            language: options.language.clone(),
            path: readme_path.to_path_buf(),
        });
    }

    let example =
        select_example(&blocks, &options.marker).ok_or_else(|| ExtractError::NoEntryPoint {
            marker: options.marker.clone(),
            path: readme_path.to_path_buf(),
        })?;

    // An output like "example.cpp" has an empty parent; nothing to create
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(output_path, example.text).map_err(|source| ExtractError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    debug!(
        output = %output_path.display(),
        bytes = example.text.len(),
        "wrote example"
    );

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_BLOCKS: &str = "# fakeclock\n\
\n\
```cpp\n\
#include <fakeclock.h>\n\
```\n\
\n\
Full example:\n\
\n\
```cpp\n\
#include <fakeclock.h>\n\
\n\
int main() {\n\
    return 0;\n\
}\n\
```\n";

    #[test]
    fn test_find_blocks_in_order() {
        let blocks = find_fenced_blocks(TWO_BLOCKS, "cpp").unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "#include <fakeclock.h>");
        assert!(blocks[1].text.starts_with("#include <fakeclock.h>\n\nint main()"));
        assert!(blocks[1].text.ends_with("return 0;\n}"));
    }

    #[test]
    fn test_language_tag_is_exact() {
        let markdown = "```CPP\nint main() {}\n```\n```cpp17\nint main() {}\n```\n```c\nint main() {}\n```";
        let blocks = find_fenced_blocks(markdown, "cpp").unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_untagged_fence_is_ignored() {
        let markdown = "```\nint main() {}\n```";
        assert!(find_fenced_blocks(markdown, "cpp").unwrap().is_empty());
    }

    #[test]
    fn test_language_is_escaped() {
        let markdown = "```c++\nint main() {}\n```\n```cc\nint main() {}\n```";
        let blocks = find_fenced_blocks(markdown, "c++").unwrap();
        assert_eq!(blocks, vec![FencedBlock { text: "int main() {}" }]);
    }

    #[test]
    fn test_block_ends_at_first_closing_fence() {
        let markdown = "```cpp\nfirst\n```\nprose\n```cpp\nsecond\n```";
        let blocks = find_fenced_blocks(markdown, "cpp").unwrap();
        let texts: Vec<_> = blocks.iter().map(|b| b.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_select_first_with_marker() {
        let blocks = [
            FencedBlock { text: "void f();" },
            FencedBlock { text: "int main() { return 1; }" },
            FencedBlock { text: "int main() { return 2; }" },
        ];
        let chosen = select_example(&blocks, "int main()").unwrap();
        assert_eq!(chosen.text, "int main() { return 1; }");
    }

    #[test]
    fn test_select_none_without_marker() {
        let blocks = [FencedBlock { text: "void f();" }];
        assert!(select_example(&blocks, "int main()").is_none());
    }

    #[test]
    fn test_extract_second_block_when_only_it_has_main() {
        let dir = TempDir::new().unwrap();
        let readme = dir.path().join("README.md");
        let output = dir.path().join("build/examples/example.cpp");
        fs::write(&readme, TWO_BLOCKS).unwrap();

        let written = extract_example(&readme, &output, &ExtractOptions::default()).unwrap();

        assert_eq!(written, output);
        let blocks = find_fenced_blocks(TWO_BLOCKS, "cpp").unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), blocks[1].text);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let readme = dir.path().join("README.md");
        let output = dir.path().join("out.cpp");
        fs::write(&readme, TWO_BLOCKS).unwrap();

        extract_example(&readme, &output, &ExtractOptions::default()).unwrap();
        let first = fs::read(&output).unwrap();
        extract_example(&readme, &output, &ExtractOptions::default()).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_blocks_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let readme = dir.path().join("README.md");
        let output = dir.path().join("nested/out.cpp");
        fs::write(&readme, "# Nothing here\n\n```python\nprint('hi')\n```\n").unwrap();

        let err = extract_example(&readme, &output, &ExtractOptions::default()).unwrap_err();

        assert!(matches!(err, ExtractError::NoBlocks { .. }));
        assert!(err.is_not_found());
        assert!(!output.exists());
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_no_main_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let readme = dir.path().join("README.md");
        let output = dir.path().join("out.cpp");
        fs::write(&readme, "```cpp\nvoid helper();\n```\n").unwrap();

        let err = extract_example(&readme, &output, &ExtractOptions::default()).unwrap_err();

        assert!(matches!(err, ExtractError::NoEntryPoint { .. }));
        assert_eq!(
            err.to_string(),
            format!("No complete examples with int main() found in {}", readme.display())
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_readme() {
        let dir = TempDir::new().unwrap();
        let err = extract_example(
            &dir.path().join("missing.md"),
            &dir.path().join("out.cpp"),
            &ExtractOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_extract_crlf_readme() {
        let dir = TempDir::new().unwrap();
        let readme = dir.path().join("README.md");
        let output = dir.path().join("out.cpp");
        fs::write(
            &readme,
            "# fakeclock\r\n\r\n```cpp\r\nint main() {\r\n    return 0;\r\n}\r\n```\r\n",
        )
        .unwrap();

        extract_example(&readme, &output, &ExtractOptions::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "int main() {\n    return 0;\n}"
        );
    }

    #[test]
    fn test_no_blocks_message_names_cpp() {
        let err = ExtractError::NoBlocks {
            language: "cpp".to_string(),
            path: PathBuf::from("README.md"),
        };
        assert_eq!(err.to_string(), "No C++ code blocks found in README.md");

        let err = ExtractError::NoBlocks {
            language: "rust".to_string(),
            path: PathBuf::from("README.md"),
        };
        assert_eq!(err.to_string(), "No rust code blocks found in README.md");
    }

    #[test]
    fn test_custom_language_and_marker() {
        let dir = TempDir::new().unwrap();
        let readme = dir.path().join("README.md");
        let output = dir.path().join("main.rs");
        fs::write(&readme, "```cpp\nint main() {}\n```\n```rust\nfn main() {}\n```\n").unwrap();

        let options = ExtractOptions {
            language: "rust".to_string(),
            marker: "fn main()".to_string(),
        };
        extract_example(&readme, &output, &options).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "fn main() {}");
    }
}
