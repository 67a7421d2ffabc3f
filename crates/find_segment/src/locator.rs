// crates/find_segment/src/locator.rs

use std::io::{self, BufRead, Read};

use segment_marker::{begin_marker, end_marker};

/// Zero-based line indexes of the last begin and end markers seen in a scan.
/// `None` means the marker never appeared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentBounds {
    pub begin: Option<usize>,
    pub end: Option<usize>,
}

impl SegmentBounds {
    /// Both markers were found. No check is made that `begin` precedes `end`.
    pub fn range(&self) -> Option<SegmentRange> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Some(SegmentRange { begin, end }),
            _ => None,
        }
    }
}

/// Marker line indexes (zero-based) of a segment that was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentRange {
    pub begin: usize,
    pub end: usize,
}

impl SegmentRange {
    /// One-based number of the first line after the begin marker.
    pub fn first_line(&self) -> usize {
        self.begin + 2
    }

    /// One-based number of the line just before the end marker.
    pub fn last_line(&self) -> usize {
        self.end
    }
}

/// Scans text for the marker pair of a single segment name.
pub struct SegmentLocator {
    begin_marker: String,
    end_marker: String,
}

impl SegmentLocator {
    pub fn new(segment_name: &str) -> Self {
        Self {
            begin_marker: begin_marker(segment_name),
            end_marker: end_marker(segment_name),
        }
    }

    pub fn begin_marker(&self) -> &str {
        &self.begin_marker
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    /// Reads all of `reader` and records the last line containing each
    /// marker. A read failure (including invalid UTF-8) aborts the scan.
    pub fn scan<R: BufRead>(&self, mut reader: R) -> io::Result<SegmentBounds> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(self.scan_str(&content))
    }

    /// Same as [`scan`](Self::scan) for content already in memory.
    pub fn scan_str(&self, content: &str) -> SegmentBounds {
        let mut bounds = SegmentBounds::default();
        for (index, line) in text_lines(content).enumerate() {
            self.observe(&mut bounds, index, line);
        }
        bounds
    }

    fn observe(&self, bounds: &mut SegmentBounds, index: usize, line: &str) {
        // Both checks run on every line; later hits overwrite earlier ones.
        if line.contains(&self.begin_marker) {
            log::debug!("'{}' found on line {}", self.begin_marker, index);
            bounds.begin = Some(index);
        }
        if line.contains(&self.end_marker) {
            log::debug!("'{}' found on line {}", self.end_marker, index);
            bounds.end = Some(index);
        }
    }
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A trailing terminator does not
/// start an extra empty line.
pub fn text_lines(content: &str) -> TextLines<'_> {
    TextLines { rest: content }
}

pub struct TextLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for TextLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &self.rest[..i];
                let terminator = if self.rest[i..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[i + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
