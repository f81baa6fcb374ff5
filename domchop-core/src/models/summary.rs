use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HELIX_MIN_LENGTH, DEFAULT_STRAND_MIN_LENGTH};
use crate::errors::ModelError;

/// Outcome of processing one batch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
    Skipped,
    Error,
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "SUCCESS"),
            Status::Skipped => write!(f, "SKIPPED"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

///
/// One entry in a batch status log: what happened to a given input and
/// why. Batch drivers write one of these per input and keep going.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLog {
    pub entry_id: String,
    pub status: Status,
    pub error: String,
    pub description: String,
}

impl StatusLog {
    pub fn success(entry_id: &str, description: &str) -> Self {
        StatusLog {
            entry_id: entry_id.to_string(),
            status: Status::Success,
            error: String::new(),
            description: description.to_string(),
        }
    }

    pub fn skipped(entry_id: &str, description: &str) -> Self {
        StatusLog {
            entry_id: entry_id.to_string(),
            status: Status::Skipped,
            error: String::new(),
            description: description.to_string(),
        }
    }

    pub fn error(entry_id: &str, error: &str, description: &str) -> Self {
        StatusLog {
            entry_id: entry_id.to_string(),
            status: Status::Error,
            error: error.to_string(),
            description: description.to_string(),
        }
    }
}

///
/// Per-domain secondary structure summary derived from a DSSP one-letter
/// string (`H` helix, `E` strand, anything else coil).
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecStrSummary {
    pub af_domain_id: String,
    pub ss_res_total: usize,
    pub res_count: usize,
    pub perc_not_in_ss: f64,
    pub sse_h_num: usize,
    pub sse_e_num: usize,
    pub sse_num: usize,
}

impl SecStrSummary {
    /// Summarize a DSSP string, counting an SSE only once its run reaches
    /// the corresponding minimum length.
    pub fn from_dssp_str(dssp_str: &str, acc_id: &str) -> Result<Self, ModelError> {
        Self::from_dssp_str_with_min_lengths(
            dssp_str,
            acc_id,
            DEFAULT_HELIX_MIN_LENGTH,
            DEFAULT_STRAND_MIN_LENGTH,
        )
    }

    pub fn from_dssp_str_with_min_lengths(
        dssp_str: &str,
        acc_id: &str,
        min_helix_length: usize,
        min_strand_length: usize,
    ) -> Result<Self, ModelError> {
        let domain_length = dssp_str.chars().count();
        if domain_length == 0 {
            return Err(ModelError::EmptyDsspString);
        }

        let ss_total = dssp_str.chars().filter(|&c| c == 'H' || c == 'E').count();
        let perc_not_in_ss =
            ((domain_length - ss_total) as f64 / domain_length as f64 * 100.0 * 100.0).round()
                / 100.0;

        let mut sse_h_num = 0;
        let mut sse_e_num = 0;
        let mut sse_h_res = 0;
        let mut sse_e_res = 0;
        let mut in_sse_h = false;
        let mut in_sse_e = false;

        for residue in dssp_str.chars() {
            if residue == 'H' {
                sse_h_res += 1;
                if sse_h_res >= min_helix_length && !in_sse_h {
                    in_sse_h = true;
                    sse_h_num += 1;
                }
            }
            if residue == 'E' {
                sse_e_res += 1;
                if sse_e_res >= min_strand_length && !in_sse_e {
                    in_sse_e = true;
                    sse_e_num += 1;
                }
            }
            if residue != 'H' && residue != 'E' {
                in_sse_h = false;
                in_sse_e = false;
                sse_h_res = 0;
                sse_e_res = 0;
            }
        }

        Ok(SecStrSummary {
            af_domain_id: acc_id.to_string(),
            ss_res_total: ss_total,
            res_count: domain_length,
            perc_not_in_ss,
            sse_h_num,
            sse_e_num,
            sse_num: sse_h_num + sse_e_num,
        })
    }
}

/// Per-domain confidence summary: mean pLDDT plus the share of residues
/// sitting in long low-confidence stretches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlddtSummary {
    pub af_domain_id: String,
    pub avg_plddt: f64,
    pub perc_lur: f64,
    pub residues_total: usize,
}

/// Low-pLDDT unreliable region (LUR) totals for one set of residues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LurSummary {
    pub lur_perc: f64,
    pub lur_total: usize,
    pub residues_total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_sec_str_summary_counts_sses() {
        //                     HHHHHH   EEE     HH (too short)
        let dssp = "CCHHHHHHCCCEEECCHHCC";
        let summary = SecStrSummary::from_dssp_str(dssp, "dom1").unwrap();
        assert_eq!(summary.res_count, 20);
        assert_eq!(summary.ss_res_total, 11);
        assert_eq!(summary.sse_h_num, 1);
        assert_eq!(summary.sse_e_num, 1);
        assert_eq!(summary.sse_num, 2);
        assert_eq!(summary.perc_not_in_ss, 45.0);
    }

    #[rstest]
    fn test_sec_str_summary_runs_reset_on_coil() {
        // two separate helices, each long enough to count
        let dssp = "HHHHHCHHHHH";
        let summary = SecStrSummary::from_dssp_str(dssp, "dom1").unwrap();
        assert_eq!(summary.sse_h_num, 2);
        assert_eq!(summary.sse_e_num, 0);
    }

    #[rstest]
    fn test_sec_str_summary_rejects_empty() {
        assert!(SecStrSummary::from_dssp_str("", "dom1").is_err());
    }

    #[rstest]
    fn test_status_log_constructors() {
        let entry = StatusLog::error("dom1", "ChoppingError", "no matching residues");
        assert_eq!(entry.status, Status::Error);
        assert_eq!(entry.status.to_string(), "ERROR");
        assert_eq!(StatusLog::success("dom1", "ok").error, "");
    }
}
