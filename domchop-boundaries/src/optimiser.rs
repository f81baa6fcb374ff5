use domchop_core::{Chopping, ResidueLabel, Segment, SeqresChopping};

use crate::error::BoundaryError;

///
/// Trim low-confidence tails off the outer ends of a chopping.
///
/// A residue survives iff its confidence is strictly greater than
/// `cutoff`; residues at or below the cutoff are trimmed. The returned
/// chopping is a fresh value (the input is never mutated) with the same
/// number of segments or fewer.
///
/// Single-segment choppings are trimmed from both ends; if the advancing
/// start meets the retreating end the segment has no surviving residues
/// and the whole chopping fails with
/// [BoundaryError::NoMatchingResidues]. Multi-segment choppings are only
/// trimmed at the first segment's start and the last segment's end;
/// internal boundaries represent genuine domain discontinuities and are
/// never touched. An outer segment that trims away completely is dropped
/// and its neighbour becomes the new candidate, until a segment survives
/// or the chopping is exhausted.
///
/// `confidence` returns the per-residue score for a sequence-numbered
/// residue label, or `None` when it has no value for that residue (which
/// aborts the trim with [BoundaryError::MissingConfidence]).
///
pub fn optimise_boundaries<F>(
    chopping: &SeqresChopping,
    confidence: F,
    cutoff: f64,
) -> Result<SeqresChopping, BoundaryError>
where
    F: Fn(&ResidueLabel) -> Option<f64>,
{
    // owned working copy; the caller's chopping stays intact
    let mut segments = chopping.segments.clone();

    if segments.len() == 1 {
        segments[0] = match trim_segment(&segments[0], &confidence, cutoff, true, true) {
            Ok(seg) => seg,
            Err(BoundaryError::NoMatchingResidues(_)) => return Err(exhausted(chopping)),
            Err(err) => return Err(err),
        };
    } else {
        // trim the start, dropping exhausted leading segments
        loop {
            let Some(first) = segments.first().cloned() else {
                return Err(exhausted(chopping));
            };
            match trim_segment(&first, &confidence, cutoff, true, false) {
                Ok(seg) => {
                    segments[0] = seg;
                    break;
                }
                Err(BoundaryError::NoMatchingResidues(_)) => {
                    segments.remove(0);
                }
                Err(err) => return Err(err),
            }
        }

        // trim the end, dropping exhausted trailing segments
        loop {
            let Some(last) = segments.last().cloned() else {
                return Err(exhausted(chopping));
            };
            match trim_segment(&last, &confidence, cutoff, false, true) {
                Ok(seg) => {
                    let last_idx = segments.len() - 1;
                    segments[last_idx] = seg;
                    break;
                }
                Err(BoundaryError::NoMatchingResidues(_)) => {
                    segments.pop();
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(Chopping {
        segments,
        fragment_offset: chopping.fragment_offset,
    })
}

fn exhausted(chopping: &SeqresChopping) -> BoundaryError {
    BoundaryError::NoMatchingResidues(chopping.to_str())
}

///
/// Trim one segment. The advancing start passes every residue at or below
/// the cutoff; the retreating end does the same from the other side. If
/// either cursor reaches the other, no residue survives.
///
/// A single-residue segment is never inspected (both scan ranges are
/// empty) and survives unchanged.
///
fn trim_segment<F>(
    segment: &Segment<u32>,
    confidence: &F,
    cutoff: f64,
    trim_start: bool,
    trim_end: bool,
) -> Result<Segment<u32>, BoundaryError>
where
    F: Fn(&ResidueLabel) -> Option<f64>,
{
    let mut new_start = segment.start;
    let mut new_end = segment.end;

    if trim_start {
        for pos in segment.start..segment.end {
            if confidence_at(confidence, pos)? > cutoff {
                break;
            }
            new_start += 1;
            if new_start == new_end {
                return Err(BoundaryError::NoMatchingResidues(segment.to_string()));
            }
        }
    }

    if trim_end {
        for pos in (segment.start + 1..=segment.end).rev() {
            if confidence_at(confidence, pos)? > cutoff {
                break;
            }
            new_end -= 1;
            if new_end == new_start {
                return Err(BoundaryError::NoMatchingResidues(segment.to_string()));
            }
        }
    }

    Ok(Segment::new(new_start, new_end))
}

pub(crate) fn confidence_at<F>(confidence: &F, pos: u32) -> Result<f64, BoundaryError>
where
    F: Fn(&ResidueLabel) -> Option<f64>,
{
    let label = ResidueLabel::new(pos as i32, None);
    confidence(&label).ok_or_else(|| BoundaryError::MissingConfidence(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Confidence curve that is low everywhere except inside the given
    /// (inclusive) windows.
    fn high_within(windows: Vec<(i32, i32)>) -> impl Fn(&ResidueLabel) -> Option<f64> {
        move |label: &ResidueLabel| {
            let high = windows
                .iter()
                .any(|&(from, to)| label.number >= from && label.number <= to);
            Some(if high { 90.0 } else { 50.0 })
        }
    }

    fn chopping(raw: &str) -> SeqresChopping {
        raw.parse().unwrap()
    }

    #[rstest]
    fn test_trim_single_segment_both_ends() {
        // confidence only exceeds the cutoff from residue 1018 onward
        let trimmed =
            optimise_boundaries(&chopping("800-1123"), high_within(vec![(1018, 1123)]), 70.0)
                .unwrap();
        assert_eq!(trimmed.to_str(), "1018-1123");
    }

    #[rstest]
    fn test_trim_single_segment_end_only() {
        let trimmed =
            optimise_boundaries(&chopping("800-1123"), high_within(vec![(800, 1100)]), 70.0)
                .unwrap();
        assert_eq!(trimmed.to_str(), "800-1100");
    }

    #[rstest]
    fn test_boundary_residues_at_cutoff_are_trimmed() {
        // survival is strictly greater-than: a residue exactly at the
        // cutoff is trimmed
        let confidence = |label: &ResidueLabel| {
            Some(match label.number {
                10 => 70.0,
                11 => 70.1,
                n if n >= 12 => 90.0,
                _ => 50.0,
            })
        };
        let trimmed = optimise_boundaries(&chopping("10-20"), confidence, 70.0).unwrap();
        assert_eq!(trimmed.to_str(), "11-20");
    }

    #[rstest]
    fn test_multi_segment_trims_outer_ends_only() {
        // residues 1000-1017 are below cutoff; the internal 1050/1070
        // boundary is untouched
        let trimmed = optimise_boundaries(
            &chopping("1000-1050_1070-1123"),
            high_within(vec![(1018, 1123)]),
            70.0,
        )
        .unwrap();
        assert_eq!(trimmed.to_str(), "1018-1050_1070-1123");
    }

    #[rstest]
    fn test_interior_boundaries_stable() {
        let trimmed = optimise_boundaries(
            &chopping("10-20_30-40_50-60"),
            high_within(vec![(15, 55)]),
            70.0,
        )
        .unwrap();
        assert_eq!(trimmed.to_str(), "15-20_30-40_50-55");
    }

    #[rstest]
    fn test_exhausted_first_segment_is_dropped() {
        // the whole first segment is low confidence; trimming moves on to
        // the second
        let trimmed = optimise_boundaries(
            &chopping("10-20_30-40"),
            high_within(vec![(35, 40)]),
            70.0,
        )
        .unwrap();
        assert_eq!(trimmed.to_str(), "35-40");
    }

    #[rstest]
    fn test_exhausted_last_segment_is_dropped() {
        let trimmed = optimise_boundaries(
            &chopping("10-20_30-40"),
            high_within(vec![(10, 15)]),
            70.0,
        )
        .unwrap();
        assert_eq!(trimmed.to_str(), "10-15");
    }

    #[rstest]
    fn test_all_segments_exhausted_is_error() {
        let result = optimise_boundaries(
            &chopping("10-20_30-40"),
            high_within(vec![]),
            70.0,
        );
        assert!(matches!(result, Err(BoundaryError::NoMatchingResidues(_))));
    }

    #[rstest]
    fn test_single_segment_exhausted_is_error() {
        let result = optimise_boundaries(&chopping("10-20"), high_within(vec![]), 70.0);
        assert!(matches!(result, Err(BoundaryError::NoMatchingResidues(_))));
    }

    #[rstest]
    fn test_single_residue_segment_survives() {
        let trimmed = optimise_boundaries(&chopping("10-10"), high_within(vec![]), 70.0).unwrap();
        assert_eq!(trimmed.to_str(), "10-10");
    }

    #[rstest]
    fn test_input_is_not_mutated() {
        let original = chopping("800-1123");
        let before = original.clone();
        let _ = optimise_boundaries(&original, high_within(vec![(1018, 1123)]), 70.0).unwrap();
        assert_eq!(original, before);
    }

    #[rstest]
    fn test_never_grows() {
        for windows in [vec![(850, 1000)], vec![(800, 1123)], vec![(900, 901)]] {
            let trimmed =
                optimise_boundaries(&chopping("800-1123"), high_within(windows), 70.0).unwrap();
            assert!(trimmed.residue_count() <= chopping("800-1123").residue_count());
        }
    }

    #[rstest]
    fn test_missing_confidence_is_error() {
        let confidence = |label: &ResidueLabel| {
            if label.number < 15 {
                Some(50.0)
            } else {
                None
            }
        };
        let result = optimise_boundaries(&chopping("10-20"), confidence, 70.0);
        assert!(matches!(result, Err(BoundaryError::MissingConfidence(_))));
    }

    #[rstest]
    fn test_fragment_offset_is_preserved() {
        let chopping = chopping("2944-3260").with_fragment_offset(2000);
        let trimmed =
            optimise_boundaries(&chopping, high_within(vec![(2944, 3260)]), 70.0).unwrap();
        assert_eq!(trimmed.fragment_offset, Some(2000));
    }
}
