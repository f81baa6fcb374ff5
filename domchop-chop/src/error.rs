use thiserror::Error;

use domchop_core::ModelError;

#[derive(Error, Debug)]
pub enum ChopError {
    /// The chopping matched nothing in the residue stream: the chopping
    /// and the structure numbering are inconsistent.
    #[error("failed to find any valid residues when applying chopping '{0}'")]
    EmptyChopping(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
