use thiserror::Error;

/// Errors raised while parsing or assembling the core models.
///
/// All of these are recoverable at the batch level: a malformed identifier
/// or an unresolvable fragment is a property of one input entry, never of
/// the process.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to parse residue label '{0}'")]
    ResidueParse(String),

    #[error("failed to match segment '{0}'")]
    SegmentParse(String),

    #[error("failed to parse chopping '{0}'")]
    ChoppingParse(String),

    #[error("failed to match AF chain id '{0}'")]
    ChainIdParse(String),

    #[error("failed to parse AF domain id '{0}'")]
    DomainIdParse(String),

    #[error("failed to find any AF fragment window containing chopping '{0}'")]
    NoMatchingFragment(String),

    #[error("chopping segment '{0}' out of range for sequence of length {1}")]
    SegmentOutOfRange(String, usize),

    #[error("failed to find any SS data in DSSP string")]
    EmptyDsspString,
}
