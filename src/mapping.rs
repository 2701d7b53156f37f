//! Parses the index-to-reading mappings of JMdictFurigana, e.g. `0:に;1:くず` or `0-2:きょうかたびら`.

use crate::error::{Error, Result, SegmentFault};
use std::fmt::Display;

/// A reading assigned to an inclusive range of character indices in a headword.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MappingSegment {
    pub start: usize,
    pub end: usize,
    pub reading: String,
}

impl MappingSegment {
    /// Whether the reading belongs to several characters as a whole, as with jukujikun and ateji.
    pub fn is_range(&self) -> bool {
        self.end > self.start
    }
}

/// Prints the segment in the form it was parsed from.
impl Display for MappingSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_range() {
            write!(f, "{}-{}:{}", self.start, self.end, self.reading)
        } else {
            write!(f, "{}:{}", self.start, self.reading)
        }
    }
}

/// Parses every segment of the mapping, in the order they appear in it.
pub fn parse(mapping: &str) -> Result<Vec<MappingSegment>> {
    MappingSegments::new(mapping).collect()
}

/// Iterator over the `;`-separated segments of a mapping.
/// Empty parts are skipped.
#[derive(Debug, Clone)]
pub struct MappingSegments<'a> {
    parts: std::str::Split<'a, char>,
}

impl<'a> MappingSegments<'a> {
    pub fn new(mapping: &'a str) -> Self {
        Self {
            parts: mapping.trim().split(';'),
        }
    }
}

impl Iterator for MappingSegments<'_> {
    type Item = Result<MappingSegment>;

    fn next(&mut self) -> Option<Self::Item> {
        let part = self.parts.by_ref().map(str::trim).find(|p| !p.is_empty())?;
        Some(parse_segment(part))
    }
}

fn parse_segment(part: &str) -> Result<MappingSegment> {
    let (index, reading) = part
        .split_once(':')
        .ok_or_else(|| Error::malformed(part, SegmentFault::MissingColon))?;
    let index = index.trim();
    let bound = |b: &str| {
        let b = b.trim();
        b.parse::<usize>()
            .map_err(|_| Error::malformed(part, SegmentFault::InvalidBound(b.to_string())))
    };
    let (start, end) = match index.split_once('-') {
        Some((a, b)) => (bound(a)?, bound(b)?),
        None => {
            let i = bound(index)?;
            (i, i)
        }
    };
    if end < start {
        return Err(Error::malformed(
            part,
            SegmentFault::ReversedRange { start, end },
        ));
    }
    Ok(MappingSegment {
        start,
        end,
        reading: reading.trim().to_string(),
    })
}
