use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::models::residue::ResidueLabel;
use crate::models::segment::{Segment, SegmentBound};

/// Chopping in UniProt/SEQRES numbering (plain integer bounds).
pub type SeqresChopping = Chopping<u32>;

/// Chopping in PDB/mmCIF structure numbering (labels with insertion codes).
pub type ResLabelChopping = Chopping<ResidueLabel>;

///
/// The ordered set of residue ranges defining one structural domain.
///
/// Segments are kept in the order they occur along the chain, which is not
/// necessarily increasing numerically; the matcher tries them against a
/// residue stream strictly in list order.
///
/// `fragment_offset` carries the affine remap for AlphaFold fragment
/// models: a residue numbered `n` in the fragment corresponds to position
/// `n + fragment_offset` in the full UniProt sequence. It is plain data so
/// choppings stay trivially comparable and serializable.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chopping<B> {
    pub segments: Vec<Segment<B>>,
    pub fragment_offset: Option<i64>,
}

impl<B> Chopping<B> {
    pub fn new(segments: Vec<Segment<B>>) -> Self {
        Chopping {
            segments,
            fragment_offset: None,
        }
    }

    pub fn with_fragment_offset(mut self, offset: i64) -> Self {
        self.fragment_offset = Some(offset);
        self
    }

    /// First residue bound of the first segment.
    pub fn first_residue(&self) -> &B {
        &self.segments[0].start
    }

    /// Last residue bound of the last segment.
    pub fn last_residue(&self) -> &B {
        &self.segments[self.segments.len() - 1].end
    }
}

impl<B: Display> Chopping<B> {
    /// Canonical string form: segments joined by `_`.
    pub fn to_str(&self) -> String {
        self.segments
            .iter()
            .map(|seg| seg.to_string())
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl SeqresChopping {
    /// Total residues covered under contiguous numbering.
    pub fn residue_count(&self) -> u32 {
        self.segments.iter().map(|seg| seg.residue_count()).sum()
    }

    /// Re-express the same ranges as structure residue labels (no
    /// insertion codes). The fragment offset does not survive: label
    /// choppings are matched against structures in their own numbering.
    pub fn to_res_labels(&self) -> ResLabelChopping {
        let segments = self
            .segments
            .iter()
            .map(|seg| {
                Segment::new(
                    ResidueLabel::new(seg.start as i32, None),
                    ResidueLabel::new(seg.end as i32, None),
                )
            })
            .collect();
        Chopping::new(segments)
    }
}

impl<B: SegmentBound> FromStr for Chopping<B> {
    type Err = ModelError;

    /// Parse a chopping string: one or more `start-end` segments separated
    /// by `_` or `,`. Parsing is all-or-nothing; any malformed segment
    /// fails the whole chopping.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(ModelError::ChoppingParse(raw.to_string()));
        }
        let segments = raw
            .split(['_', ','])
            .map(|seg_str| seg_str.parse())
            .collect::<Result<Vec<Segment<B>>, _>>()?;
        Ok(Chopping::new(segments))
    }
}

impl<B: Display> Display for Chopping<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
