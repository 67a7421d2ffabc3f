// crates/find_segment/src/lib.rs

//! Locates a `// Segment <name> begin` / `// Segment <name> end` pair in a
//! source file and renders the `\inputminted` line that embeds its body.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod directive;
pub mod locator;

pub use directive::{render_directive, MINTED_LANGUAGE};
pub use locator::{SegmentBounds, SegmentLocator, SegmentRange};

/// Scans `file_path` for the named segment and returns the directive for it.
///
/// Returns `Ok(None)` when either marker is missing. Failing to open or read
/// the file is an error. A path that is not valid UTF-8 is echoed lossily.
pub fn find_segment<P: AsRef<Path>>(file_path: P, segment_name: &str) -> Result<Option<String>> {
    let file_path = file_path.as_ref();
    let locator = SegmentLocator::new(segment_name);
    log::debug!(
        "Searching {} for '{}' / '{}'",
        file_path.display(),
        locator.begin_marker(),
        locator.end_marker()
    );

    let file = File::open(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;
    let bounds = locator
        .scan(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    log::debug!("Segment '{}' bounds: {:?}", segment_name, bounds);

    Ok(bounds
        .range()
        .map(|range| render_directive(&range, &file_path.to_string_lossy())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_find_segment_success() {
        let temp_file = temp_file_with(
            "line0\n// Segment demo begin\nline2\nline3\n// Segment demo end\nline5\n",
        );
        let path = temp_file.path().to_str().unwrap();
        let directive = find_segment(path, "demo").unwrap();
        assert_eq!(
            directive,
            Some(format!("\\inputminted[firstline=3,lastline=4]{{zig}}{{{}}}", path))
        );
    }

    #[test]
    fn test_find_segment_missing() {
        let temp_file = temp_file_with("// Segment demo begin\n// Segment demo end\n");
        let path = temp_file.path().to_str().unwrap();
        assert_eq!(find_segment(path, "missing").unwrap(), None);
    }

    #[test]
    fn test_find_segment_empty_file() {
        let temp_file = temp_file_with("");
        let path = temp_file.path().to_str().unwrap();
        assert_eq!(find_segment(path, "demo").unwrap(), None);
    }

    #[test]
    fn test_find_segment_cr_only_file() {
        let temp_file = temp_file_with(
            "line0\r// Segment demo begin\rline2\rline3\r// Segment demo end\rline5\r",
        );
        let path = temp_file.path().to_str().unwrap();
        let directive = find_segment(path, "demo").unwrap();
        assert_eq!(
            directive,
            Some(format!("\\inputminted[firstline=3,lastline=4]{{zig}}{{{}}}", path))
        );
    }

    #[test]
    fn test_find_segment_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.zig");
        let err = find_segment(&path, "demo").unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
