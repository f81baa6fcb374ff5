//! # Boundary optimisation for predicted domains.
//!
//! AlphaFold models often carry "unpacked tails": stretches of
//! low-confidence residues hanging off the outer ends of a predicted
//! domain. This crate trims those tails off a chopping using a
//! per-residue confidence score (pLDDT) and a cutoff, and computes
//! per-domain confidence summaries.
//!
//! Trimming never touches internal segment boundaries: those represent
//! genuine domain discontinuities rather than tails.

pub mod error;
pub mod optimiser;
pub mod plddt;

// re-export for cleaner imports
pub use self::error::BoundaryError;
pub use self::optimiser::optimise_boundaries;
pub use self::plddt::{average_plddt, lur_summary, plddt_summary};
