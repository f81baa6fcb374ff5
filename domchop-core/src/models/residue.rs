use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

///
/// A residue's structural identity: numeric position plus optional
/// insertion code.
///
/// Labels come straight from PDB/mmCIF files, so they are not guaranteed
/// contiguous or monotonic within a chain. Negative numbers and repeated
/// insertion-coded residues (`100`, `100A`, `100B`, ...) all occur in real
/// structures, which is why the matcher compares labels by equality and
/// never by arithmetic distance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResidueLabel {
    pub number: i32,
    pub insert_code: Option<char>,
}

impl ResidueLabel {
    pub fn new(number: i32, insert_code: Option<char>) -> Self {
        ResidueLabel {
            number,
            insert_code,
        }
    }

    /// Translate this label's number by a fragment offset, keeping the
    /// insertion code. Used to map fragment-local numbering back to the
    /// full UniProt sequence.
    pub fn with_offset(&self, offset: i64) -> ResidueLabel {
        ResidueLabel {
            number: (self.number as i64 + offset) as i32,
            insert_code: self.insert_code,
        }
    }
}

impl FromStr for ResidueLabel {
    type Err = ModelError;

    /// Parse a residue label of the form `<number><INSERT?>`, e.g. `101`,
    /// `-3` or `100A`. Anything else is a hard parse error.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let err = || ModelError::ResidueParse(raw.to_string());

        let (num_part, insert_code) = match raw.chars().last() {
            Some(c) if c.is_ascii_uppercase() => (&raw[..raw.len() - 1], Some(c)),
            Some(_) => (raw, None),
            None => return Err(err()),
        };

        let rest = num_part.strip_prefix('-').unwrap_or(num_part);
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let number: i32 = num_part.parse().map_err(|_| err())?;
        Ok(ResidueLabel::new(number, insert_code))
    }
}

impl Display for ResidueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.insert_code {
            Some(code) => write!(f, "{}{}", self.number, code),
            None => write!(f, "{}", self.number),
        }
    }
}
