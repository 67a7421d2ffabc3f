// crates/find_segment/src/directive.rs

use crate::locator::SegmentRange;

/// Language label handed to minted, whatever the file actually contains.
pub const MINTED_LANGUAGE: &str = "zig";

/// Formats the `\inputminted` line for `range` of `file_path`.
/// The path is emitted exactly as given.
pub fn render_directive(range: &SegmentRange, file_path: &str) -> String {
    format!(
        "\\inputminted[firstline={},lastline={}]{{{}}}{{{}}}",
        range.first_line(),
        range.last_line(),
        MINTED_LANGUAGE,
        file_path
    )
}
