//! Shared constants for the domchop workspace.

/// Number of residues in one AlphaFold whole-proteome fragment model.
///
/// Long proteins are predicted as overlapping fragments, e.g. Titin is
/// released as Q8WZ42-F1 (residues 1-1400), Q8WZ42-F2 (201-1600), etc.
pub const AF_FRAGMENT_MAX_RESIDUES: u32 = 1400;

/// Offset between the start positions of consecutive AlphaFold fragments.
pub const AF_FRAGMENT_OVERLAP_WINDOW: u32 = 200;

/// Upper bound on the fragment search when resolving a UniProt-numbered
/// chopping to a fragment window.
pub const AF_FRAGMENT_SEARCH_LIMIT: u32 = 1000;

/// AlphaFold model version assumed when none is given.
pub const DEFAULT_AF_VERSION: u32 = 3;

/// AlphaFold fragment number assumed when none is given.
pub const DEFAULT_AF_FRAGMENT: u32 = 1;

/// Default pLDDT cutoff used when trimming domain tails.
pub const DEFAULT_PLDDT_CUTOFF: f64 = 70.0;

/// Residues under this pLDDT count towards low-confidence (LUR) stretches.
pub const LUR_PLDDT_CUTOFF: f64 = 90.0;

/// Minimum run of consecutive low-pLDDT residues that counts as a LUR.
pub const MIN_LENGTH_LUR: usize = 20;

/// Minimum residues for a helix to count as an SSE in DSSP summaries.
pub const DEFAULT_HELIX_MIN_LENGTH: usize = 5;

/// Minimum residues for a strand to count as an SSE in DSSP summaries.
pub const DEFAULT_STRAND_MIN_LENGTH: usize = 3;
