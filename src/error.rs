//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while annotating a corpus.
#[derive(Debug, Error)]
pub enum Error {
    /// A mapping segment could not be parsed or does not fit its headword.
    /// Only ever fatal for the record it belongs to.
    #[error("malformed segment `{segment}`: {fault}")]
    MalformedSegment {
        segment: String,
        fault: SegmentFault,
    },

    /// A resource could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The kanji dictionary is not well-formed XML.
    #[error("invalid kanji dictionary: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid kanji dictionary attribute: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),
}

/// The reason a mapping segment was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentFault {
    #[error("missing `:` between index and reading")]
    MissingColon,
    #[error("`{0}` is not a character index")]
    InvalidBound(String),
    #[error("range {start}-{end} runs backwards")]
    ReversedRange { start: usize, end: usize },
    #[error("range ends at {end} but the headword only has {len} characters")]
    RangeExceedsHeadword { end: usize, len: usize },
}

impl Error {
    pub(crate) fn malformed(segment: &str, fault: SegmentFault) -> Self {
        Self::MalformedSegment {
            segment: segment.to_string(),
            fault,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
