use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use domchop_core::ResidueLabel;
use domchop_core::models::summary::PlddtSummary;
use domchop_core::utils::get_dynamic_reader;

use crate::error::DomainIoError;

///
/// Per-residue confidence scores for one chain, read from a tab-separated
/// table of `residue_label<TAB>plddt` rows (plain or gzipped). This is the
/// in-repo stand-in for a structure accessor: it supplies both the ordered
/// residue stream and the confidence lookup the engine crates consume.
///
/// Lines starting with `#` and an optional `residue`-labelled header line
/// are skipped.
///
#[derive(Debug, Clone)]
pub struct PlddtTable {
    residues: Vec<(ResidueLabel, f64)>,
    by_label: HashMap<ResidueLabel, f64>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for PlddtTable {
    type Error = anyhow::Error;

    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;

        let mut residues: Vec<(ResidueLabel, f64)> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() || line.starts_with('#') || line.starts_with("residue") {
                continue;
            }

            let mut fields = line.split('\t');
            let parsed = match (fields.next(), fields.next()) {
                (Some(label), Some(plddt)) => label
                    .parse::<ResidueLabel>()
                    .ok()
                    .zip(plddt.parse::<f64>().ok()),
                _ => None,
            };
            match parsed {
                Some((label, plddt)) => residues.push((label, plddt)),
                None => return Err(DomainIoError::PlddtRow(line).into()),
            }
        }

        let by_label = residues.iter().copied().collect();
        Ok(PlddtTable {
            residues,
            by_label,
            path: Some(value.to_owned()),
        })
    }
}

impl TryFrom<&str> for PlddtTable {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        PlddtTable::try_from(Path::new(value))
    }
}

impl PlddtTable {
    /// Confidence for one residue, if the table has it.
    pub fn confidence(&self, label: &ResidueLabel) -> Option<f64> {
        self.by_label.get(label).copied()
    }

    /// Residues in their order in the table (the chain's natural order),
    /// with the score as payload.
    pub fn residues(&self) -> impl Iterator<Item = (ResidueLabel, f64)> + '_ {
        self.residues.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

///
/// Writer for per-domain confidence summaries (`af_domain_id`,
/// `avg_plddt`, `perc_lur`, `residues_total`).
///
pub struct PlddtSummaryWriter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> PlddtSummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        PlddtSummaryWriter {
            wtr: csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer),
        }
    }

    pub fn write_summary(&mut self, summary: &PlddtSummary) -> Result<(), DomainIoError> {
        self.wtr.serialize(summary)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), DomainIoError> {
        self.wtr.flush()?;
        Ok(())
    }
}
