use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoundaryError {
    /// Trimming exhausted a segment (or the whole chopping) without
    /// finding a residue over the cutoff.
    #[error("failed to find any residues over cutoff in '{0}'")]
    NoMatchingResidues(String),

    /// The confidence lookup had no value for a residue the algorithm
    /// needed to inspect. Boundaries are never moved on absent data.
    #[error("no confidence value for residue '{0}'")]
    MissingConfidence(String),
}
