// crates/segment_marker/src/lib.rs

//! Marker comments that delimit a named segment inside a source file.

/// Every marker line starts with this prefix, followed by the segment name.
pub const SEGMENT_MARKER_PREFIX: &str = "// Segment ";

pub const BEGIN_SUFFIX: &str = " begin";
pub const END_SUFFIX: &str = " end";

/// Builds `// Segment <name> begin`. The name is used verbatim.
pub fn begin_marker(segment_name: &str) -> String {
    format!("{}{}{}", SEGMENT_MARKER_PREFIX, segment_name, BEGIN_SUFFIX)
}

/// Builds `// Segment <name> end`. The name is used verbatim.
pub fn end_marker(segment_name: &str) -> String {
    format!("{}{}{}", SEGMENT_MARKER_PREFIX, segment_name, END_SUFFIX)
}
