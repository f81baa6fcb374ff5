//! # Core models for protein domain choppings.
//!
//! This crate holds the shared value types used across the domchop
//! workspace: residue labels, segments, choppings (the residue ranges that
//! make up one structural domain), AlphaFold chain/domain identifiers and
//! the summary records produced by batch runs.
//!
//! Everything here is a plain in-memory value: created by parsing a string
//! or assembling fields, consumed by the matcher/optimiser crates and then
//! serialized back out. No file handles, no teardown.

pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::errors::ModelError;
pub use self::models::chopping::{Chopping, ResLabelChopping, SeqresChopping};
pub use self::models::identifiers::{ChainId, DomainId};
pub use self::models::residue::ResidueLabel;
pub use self::models::segment::{Segment, SegmentBound};
