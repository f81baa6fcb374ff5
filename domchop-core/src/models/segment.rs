use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::models::residue::ResidueLabel;

static RE_SEQRES_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<start>[0-9]+)-(?P<end>[0-9]+)$").unwrap());

static RE_RESLABEL_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<start>-?[0-9]+[A-Z]?)-(?P<end>-?[0-9]+[A-Z]?)$").unwrap()
});

///
/// One bound (start or end) of a segment.
///
/// Segments come in two numbering spaces: plain sequence positions (`u32`,
/// UniProt/SEQRES numbering) and structure residue labels ([ResidueLabel],
/// PDB/mmCIF numbering with insertion codes). Both share this interface so
/// the chopping grammar and the matcher are written once.
///
pub trait SegmentBound: Clone + PartialEq + Display + Sized {
    /// Grammar for a full `start-end` segment in this numbering space.
    fn segment_re() -> &'static Regex;

    /// Parse one bound from its text form.
    fn parse_bound(raw: &str) -> Result<Self, ModelError>;

    /// Does a structure residue label sit exactly on this bound?
    fn matches_label(&self, label: &ResidueLabel) -> bool;
}

impl SegmentBound for u32 {
    fn segment_re() -> &'static Regex {
        &RE_SEQRES_SEGMENT
    }

    fn parse_bound(raw: &str) -> Result<Self, ModelError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::SegmentParse(raw.to_string()));
        }
        raw.parse()
            .map_err(|_| ModelError::SegmentParse(raw.to_string()))
    }

    /// A sequence position only matches an un-inserted residue with the
    /// same number.
    fn matches_label(&self, label: &ResidueLabel) -> bool {
        label.insert_code.is_none() && label.number as i64 == *self as i64
    }
}

impl SegmentBound for ResidueLabel {
    fn segment_re() -> &'static Regex {
        &RE_RESLABEL_SEGMENT
    }

    fn parse_bound(raw: &str) -> Result<Self, ModelError> {
        raw.parse()
            .map_err(|_| ModelError::SegmentParse(raw.to_string()))
    }

    fn matches_label(&self, label: &ResidueLabel) -> bool {
        self == label
    }
}

///
/// One contiguous inclusive residue range within a chopping.
///
/// `start <= end` is not checked at construction time: bounds only become
/// meaningful once they are matched against the residues of a real
/// structure.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment<B> {
    pub start: B,
    pub end: B,
}

impl<B> Segment<B> {
    pub fn new(start: B, end: B) -> Self {
        Segment { start, end }
    }
}

impl Segment<u32> {
    /// Number of residues this segment covers under contiguous numbering.
    pub fn residue_count(&self) -> u32 {
        (self.end as i64 - self.start as i64 + 1).max(0) as u32
    }
}

impl<B: SegmentBound> FromStr for Segment<B> {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let caps = B::segment_re()
            .captures(raw)
            .ok_or_else(|| ModelError::SegmentParse(raw.to_string()))?;
        Ok(Segment::new(
            B::parse_bound(&caps["start"])?,
            B::parse_bound(&caps["end"])?,
        ))
    }
}

impl<B: Display> Display for Segment<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
