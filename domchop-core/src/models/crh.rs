use serde::{Deserialize, Serialize};

///
/// One row from a Gene3D CATH-resolve-hits (CRH) file.
///
/// Example line (tab separated):
/// `3ce18771b4195d6aad287c3965a3c4f8  5ksdA01__1.20.1110.10/95-132_218-326_627-816  1054.6  95-132,218-326,627-816  95-132,218-326,627-816`
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene3DCrh {
    pub sequence_md5: String,
    pub domain_sfam_id: String,
    pub bitscore: f64,
    pub chopping_raw: String,
    pub chopping_final: String,
}

impl Gene3DCrh {
    /// Domain id part of `domain_sfam_id` (before the `__`).
    pub fn domain_id(&self) -> &str {
        self.domain_sfam_id
            .split("__")
            .next()
            .unwrap_or(&self.domain_sfam_id)
    }

    pub fn model_id(&self) -> &str {
        self.domain_id()
    }

    /// Superfamily id part of `domain_sfam_id` (after the `__`, before any
    /// `/chopping` suffix).
    pub fn superfamily_id(&self) -> &str {
        self.domain_sfam_id
            .split("__")
            .nth(1)
            .and_then(|sfam| sfam.split('/').next())
            .unwrap_or("")
    }
}

/// Data on a predicted CATH domain, as provided by Gene3D.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedCathDomain {
    pub uniprot_acc: String,
    pub sequence_md5: String,
    pub gene3d_domain_id: String,
    pub bitscore: f64,
    pub chopping: String,
    pub indp_evalue: f64,
}
