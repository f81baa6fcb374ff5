//! # Segment matching for domain choppings.
//!
//! Residue labels in a PDB/mmCIF structure are strings that usually look
//! like numbers but can be non-sequential and carry insertion codes, so a
//! chopping cannot be applied to a chain by arithmetic on residue numbers.
//! This crate walks a chain's residues once, in order, and decides for
//! each residue whether it falls inside one of the chopping's segments.
//!
//! ```
//! use domchop_chop::match_residues;
//! use domchop_core::{ResLabelChopping, ResidueLabel};
//!
//! let chopping: ResLabelChopping = "12-23_34-45".parse().unwrap();
//! let residues = (1..=100).map(|n| {
//!     let label = ResidueLabel::new(n, None);
//!     (label, label)
//! });
//!
//! let matched: Vec<_> = match_residues(&chopping, residues).collect();
//! assert_eq!(matched.len(), 24);
//! ```

pub mod error;
pub mod guess;
pub mod matcher;

// re-export for cleaner imports
pub use self::error::ChopError;
pub use self::guess::guess_chopping;
pub use self::matcher::{SegmentMatches, filter_residues, match_residues};
