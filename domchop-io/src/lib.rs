//! # Input/Output utilities for domain batch runs.
//!
//! Readers and writers for the flat files that flow through a batch run:
//! domain-id lists, post-tailchop mapping files, status logs, Gene3D CRH
//! rows and per-chain pLDDT tables. All of them are tab-separated text,
//! transparently gzip-decompressed on the way in.

pub mod crh;
pub mod domain_list;
pub mod error;
pub mod fasta;
pub mod plddt;
pub mod status;

// re-export for cleaner imports
pub use self::crh::read_gene3d_crh;
pub use self::domain_list::{DomainListWriter, MappingWriter, read_af_domain_ids};
pub use self::error::DomainIoError;
pub use self::fasta::sequence_md5s_from_fasta;
pub use self::plddt::{PlddtSummaryWriter, PlddtTable};
pub use self::status::StatusLogWriter;
