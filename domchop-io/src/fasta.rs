use std::path::Path;

use anyhow::Result;
use bio::io::fasta;

use domchop_core::utils::{get_dynamic_reader, str_md5};

use crate::error::DomainIoError;

///
/// Read a (multi-)FASTA file and return `(record_id, md5)` pairs, where
/// the digest is over the raw sequence. Used to tie AF chains back to
/// UniProt sequences by sequence identity.
///
pub fn sequence_md5s_from_fasta(path: &Path) -> Result<Vec<(String, String)>> {
    let reader = fasta::Reader::new(get_dynamic_reader(path)?);

    let mut digests = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => {
                let sequence = String::from_utf8_lossy(record.seq()).to_string();
                digests.push((record.id().to_string(), str_md5(&sequence)));
            }
            Err(e) => {
                return Err(DomainIoError::Fasta(format!("{}: {}", path.display(), e)).into());
            }
        }
    }
    Ok(digests)
}

#[cfg(test)]
mod tests {
    use super::*;

    use domchop_core::utils::str_md5;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_sequence_md5s_from_fasta() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("chains.fasta");
        std::fs::write(&path, ">P00520\nMGQQPGKVLGD\n>Q15772\nMTTQAPTFTQPLQ\n").unwrap();

        let digests = sequence_md5s_from_fasta(&path).unwrap();
        assert_eq!(digests.len(), 2);
        assert_eq!(digests[0].0, "P00520");
        assert_eq!(digests[0].1, str_md5("MGQQPGKVLGD"));
        assert_eq!(digests[1].0, "Q15772");
    }
}
