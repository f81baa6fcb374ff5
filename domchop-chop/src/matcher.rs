use domchop_core::{Chopping, ResidueLabel, SegmentBound};

use crate::error::ChopError;

/// Where the matcher is in its single pass over the residue stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchState {
    /// Waiting for the start of the segment at this index.
    Seeking(usize),
    /// Inside the segment at this index, emitting every residue.
    InSegment(usize),
    /// All segments closed; remaining residues are not inspected.
    Finished,
}

///
/// Lazy iterator over the residues of a chain that fall inside a chopping.
///
/// The input is any ordered stream of `(ResidueLabel, payload)` pairs in
/// their natural structural order; the output yields the payloads of the
/// matched residues, in stream order. Each call to [match_residues] starts
/// from a fresh state, so matchers never leak state between passes.
///
/// A residue is matched iff it lies between a segment's start and end
/// (both inclusive) in stream order, decided by label equality on the
/// effective label: when the chopping carries a fragment offset, the
/// residue number is translated by that offset before comparing, so a
/// UniProt-numbered chopping can be applied to a fragment-local structure.
///
/// If a segment's start never appears in the stream, that segment simply
/// contributes no residues and later segments are still tried. An entirely
/// empty result is not an error here; callers that need to treat it as one
/// use [filter_residues].
///
pub struct SegmentMatches<'c, B, I> {
    chopping: &'c Chopping<B>,
    residues: I,
    state: MatchState,
}

/// Match a residue stream against a chopping, yielding matched payloads
/// lazily in stream order.
pub fn match_residues<'c, B, I, T>(
    chopping: &'c Chopping<B>,
    residues: I,
) -> SegmentMatches<'c, B, I::IntoIter>
where
    B: SegmentBound,
    I: IntoIterator<Item = (ResidueLabel, T)>,
{
    let state = if chopping.segments.is_empty() {
        MatchState::Finished
    } else {
        MatchState::Seeking(0)
    };
    SegmentMatches {
        chopping,
        residues: residues.into_iter(),
        state,
    }
}

/// Match a residue stream against a chopping, collecting the matched
/// payloads. An empty result means the chopping and the structure
/// numbering are inconsistent and is surfaced as
/// [ChopError::EmptyChopping].
pub fn filter_residues<B, I, T>(chopping: &Chopping<B>, residues: I) -> Result<Vec<T>, ChopError>
where
    B: SegmentBound,
    I: IntoIterator<Item = (ResidueLabel, T)>,
{
    let matched: Vec<T> = match_residues(chopping, residues).collect();
    if matched.is_empty() {
        return Err(ChopError::EmptyChopping(chopping.to_str()));
    }
    Ok(matched)
}

impl<'c, B, I> SegmentMatches<'c, B, I> {
    /// State for the segment after `idx`, or `Finished` when none remain.
    fn seek_next(&self, idx: usize) -> MatchState {
        if idx + 1 < self.chopping.segments.len() {
            MatchState::Seeking(idx + 1)
        } else {
            MatchState::Finished
        }
    }
}

impl<'c, B, I, T> Iterator for SegmentMatches<'c, B, I>
where
    B: SegmentBound,
    I: Iterator<Item = (ResidueLabel, T)>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if self.state == MatchState::Finished {
                return None;
            }
            let (label, payload) = self.residues.next()?;

            // compare in the chopping's numbering space
            let effective = match self.chopping.fragment_offset {
                Some(offset) => label.with_offset(offset),
                None => label,
            };

            match self.state {
                MatchState::Seeking(idx) => {
                    let segment = &self.chopping.segments[idx];
                    if segment.start.matches_label(&effective) {
                        // a segment whose start and end are the same label
                        // matches exactly one residue
                        self.state = if segment.end.matches_label(&effective) {
                            self.seek_next(idx)
                        } else {
                            MatchState::InSegment(idx)
                        };
                        return Some(payload);
                    }
                }
                MatchState::InSegment(idx) => {
                    let segment = &self.chopping.segments[idx];
                    if segment.end.matches_label(&effective) {
                        self.state = self.seek_next(idx);
                    }
                    return Some(payload);
                }
                MatchState::Finished => unreachable!(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use domchop_core::{ResLabelChopping, SeqresChopping};
    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Contiguously numbered chain residues `1..=n` with no insertion
    /// codes, with the label itself as payload.
    fn contiguous_chain(n: i32) -> Vec<(ResidueLabel, ResidueLabel)> {
        (1..=n)
            .map(|num| {
                let label = ResidueLabel::new(num, None);
                (label, label)
            })
            .collect()
    }

    #[rstest]
    fn test_single_segment_contiguous_chain() {
        let chopping: SeqresChopping = "10-20".parse().unwrap();
        let matched: Vec<_> = match_residues(&chopping, contiguous_chain(1123)).collect();
        assert_eq!(matched.len(), 11);
        assert_eq!(matched[0], ResidueLabel::new(10, None));
        assert_eq!(matched[10], ResidueLabel::new(20, None));
    }

    #[rstest]
    fn test_multi_segment_count_matches_residue_count() {
        let chopping: SeqresChopping = "12-23_34-45".parse().unwrap();
        let matched: Vec<_> = match_residues(&chopping, contiguous_chain(100)).collect();
        assert_eq!(matched.len() as u32, chopping.residue_count());
    }

    #[rstest]
    fn test_matched_residues_in_stream_order() {
        let chopping: SeqresChopping = "12-23_34-45".parse().unwrap();
        let matched: Vec<_> = match_residues(&chopping, contiguous_chain(100)).collect();
        let expected: Vec<_> = (12..=23)
            .chain(34..=45)
            .map(|num| ResidueLabel::new(num, None))
            .collect();
        assert_eq!(matched, expected);
    }

    #[rstest]
    fn test_single_residue_segment() {
        let chopping: SeqresChopping = "5-5".parse().unwrap();
        let matched: Vec<_> = match_residues(&chopping, contiguous_chain(10)).collect();
        assert_eq!(matched, vec![ResidueLabel::new(5, None)]);
    }

    #[rstest]
    fn test_missing_segment_contributes_nothing() {
        // the first segment's start never appears; the second still matches
        let chopping: SeqresChopping = "2000-2100_5-8".parse().unwrap();
        let matched: Vec<_> = match_residues(&chopping, contiguous_chain(10)).collect();
        assert!(matched.is_empty());

        let chopping: SeqresChopping = "5-8_2000-2100".parse().unwrap();
        let matched: Vec<_> = match_residues(&chopping, contiguous_chain(10)).collect();
        assert_eq!(matched.len(), 4);
    }

    #[rstest]
    fn test_match_by_label_equality_across_gaps() {
        // chain numbering jumps from 159 to 198; the segment spans the gap
        let chopping: ResLabelChopping = "135-366".parse().unwrap();
        let residues: Vec<_> = (135..=159)
            .chain(198..=366)
            .map(|num| (ResidueLabel::new(num, None), num))
            .collect();
        let matched: Vec<_> = match_residues(&chopping, residues).collect();
        assert_eq!(matched.len(), 25 + 169);
        assert_eq!(matched[24], 159);
        assert_eq!(matched[25], 198);
    }

    #[rstest]
    fn test_insertion_coded_residues() {
        // 100, 100A, 100B, 101: segment ends on the insertion-coded 100A
        let chopping: ResLabelChopping = "99-100A".parse().unwrap();
        let residues = vec![
            (ResidueLabel::new(99, None), "99"),
            (ResidueLabel::new(100, None), "100"),
            (ResidueLabel::new(100, Some('A')), "100A"),
            (ResidueLabel::new(100, Some('B')), "100B"),
            (ResidueLabel::new(101, None), "101"),
        ];
        let matched: Vec<_> = match_residues(&chopping, residues).collect();
        assert_eq!(matched, vec!["99", "100", "100A"]);
    }

    #[rstest]
    fn test_seqres_bound_skips_insertion_coded_start() {
        // a plain sequence bound never matches an insertion-coded label
        let chopping: SeqresChopping = "100-101".parse().unwrap();
        let residues = vec![
            (ResidueLabel::new(100, Some('A')), "100A"),
            (ResidueLabel::new(100, None), "100"),
            (ResidueLabel::new(101, None), "101"),
        ];
        let matched: Vec<_> = match_residues(&chopping, residues).collect();
        assert_eq!(matched, vec!["100", "101"]);
    }

    #[rstest]
    fn test_fragment_offset_translates_local_numbering() {
        // chopping is UniProt-numbered 2944-3260; the fragment model is
        // numbered 944-1260 locally (offset 2000)
        let chopping: SeqresChopping = "2944-3260"
            .parse::<SeqresChopping>()
            .unwrap()
            .with_fragment_offset(2000);
        let residues: Vec<_> = (1..=1400)
            .map(|num| (ResidueLabel::new(num, None), num))
            .collect();
        let matched: Vec<_> = match_residues(&chopping, residues).collect();
        assert_eq!(matched.len(), 317);
        assert_eq!(matched[0], 944);
        assert_eq!(*matched.last().unwrap(), 1260);
    }

    #[rstest]
    fn test_stops_after_last_segment() {
        let chopping: SeqresChopping = "2-3".parse().unwrap();
        let mut residues_seen = 0;
        let residues = (1..=100).map(|num| {
            residues_seen += 1;
            (ResidueLabel::new(num, None), num)
        });
        let matched: Vec<_> = match_residues(&chopping, residues).collect();
        assert_eq!(matched, vec![2, 3]);
        // the pass exits early once the final segment closes
        assert!(residues_seen <= 4);
    }

    #[rstest]
    fn test_filter_residues_empty_is_error() {
        let chopping: SeqresChopping = "2000-2100".parse().unwrap();
        let result = filter_residues(&chopping, contiguous_chain(10));
        assert!(matches!(result, Err(ChopError::EmptyChopping(_))));
    }

    #[rstest]
    fn test_filter_residues_ok() {
        let chopping: SeqresChopping = "2-3".parse().unwrap();
        let matched = filter_residues(&chopping, contiguous_chain(10)).unwrap();
        assert_eq!(matched.len(), 2);
    }

    #[rstest]
    fn test_rerun_starts_fresh() {
        let chopping: SeqresChopping = "2-3".parse().unwrap();
        let first: Vec<_> = match_residues(&chopping, contiguous_chain(10)).collect();
        let second: Vec<_> = match_residues(&chopping, contiguous_chain(10)).collect();
        assert_eq!(first, second);
    }
}
