use domchop_core::consts::{LUR_PLDDT_CUTOFF, MIN_LENGTH_LUR};
use domchop_core::models::summary::{LurSummary, PlddtSummary};
use domchop_core::{DomainId, ResidueLabel, SeqresChopping};

use crate::error::BoundaryError;
use crate::optimiser::confidence_at;

/// Mean pLDDT over the chopping's residues, rounded to two decimals.
pub fn average_plddt<F>(chopping: &SeqresChopping, confidence: F) -> Result<f64, BoundaryError>
where
    F: Fn(&ResidueLabel) -> Option<f64>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for seg in &chopping.segments {
        for pos in seg.start..=seg.end {
            total += confidence_at(&confidence, pos)?;
            count += 1;
        }
    }
    Ok((total / count as f64 * 100.0).round() / 100.0)
}

///
/// Find low-pLDDT unreliable regions (LURs) among the chopping's
/// residues: stretches of at least [MIN_LENGTH_LUR] consecutive residues
/// with pLDDT under [LUR_PLDDT_CUTOFF]. Shorter dips do not count.
///
pub fn lur_summary<F>(chopping: &SeqresChopping, confidence: F) -> Result<LurSummary, BoundaryError>
where
    F: Fn(&ResidueLabel) -> Option<f64>,
{
    let mut residues_total = 0usize;
    let mut lur_total = 0usize;
    let mut lur_res = 0usize;
    let mut lur_stretch = false;

    for seg in &chopping.segments {
        for pos in seg.start..=seg.end {
            residues_total += 1;
            let plddt = confidence_at(&confidence, pos)?;
            if plddt < LUR_PLDDT_CUTOFF {
                lur_res += 1;
                if lur_stretch {
                    lur_total += 1;
                }
                if lur_res == MIN_LENGTH_LUR && !lur_stretch {
                    lur_stretch = true;
                    lur_total += MIN_LENGTH_LUR;
                }
            } else {
                lur_stretch = false;
                lur_res = 0;
            }
        }
    }

    let lur_perc = (lur_total as f64 / residues_total as f64 * 100.0 * 100.0).round() / 100.0;
    Ok(LurSummary {
        lur_perc,
        lur_total,
        residues_total,
    })
}

/// Full per-domain confidence summary for one domain id.
pub fn plddt_summary<F>(domain_id: &DomainId, confidence: F) -> Result<PlddtSummary, BoundaryError>
where
    F: Fn(&ResidueLabel) -> Option<f64>,
{
    let avg_plddt = average_plddt(&domain_id.chopping, &confidence)?;
    let lur = lur_summary(&domain_id.chopping, &confidence)?;
    Ok(PlddtSummary {
        af_domain_id: domain_id.to_string(),
        avg_plddt,
        perc_lur: lur.lur_perc,
        residues_total: lur.residues_total,
    })
}
