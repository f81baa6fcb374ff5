use domchop_core::{Chopping, ResLabelChopping, ResidueLabel, Segment};

///
/// Reverse engineer a chopping from an ordered stream of structure atoms.
///
/// 'Real' PDB files can have weird residue numberings, so it is not
/// possible to reliably know whether a file has been chopped by an
/// external process (i.e. a CATH domain) or whether the numbering in the
/// original file is just weird. The best we can do is guess: a new segment
/// starts wherever the residue label changes and the atom serial number
/// jumps at the same time.
///
/// `records` yields one `(residue_label, atom_serial)` pair per atom, in
/// file order; consecutive atoms of the same residue share a label. With
/// `assume_all_atom_breaks_are_segments` turned off the result is a single
/// segment spanning the whole stream.
///
/// Returns `None` for an empty stream.
///
pub fn guess_chopping<I>(
    records: I,
    assume_all_atom_breaks_are_segments: bool,
) -> Option<ResLabelChopping>
where
    I: IntoIterator<Item = (ResidueLabel, u32)>,
{
    let mut segments: Vec<Segment<ResidueLabel>> = Vec::new();

    let mut start_res: Option<ResidueLabel> = None;
    let mut end_res: Option<ResidueLabel> = None;
    let mut last_atom_num: Option<u32> = None;
    let mut last_res_label: Option<ResidueLabel> = None;

    for (res_label, atom_num) in records {
        if assume_all_atom_breaks_are_segments {
            if let (Some(last_label), Some(last_num)) = (last_res_label, last_atom_num) {
                if res_label != last_label && atom_num != last_num + 1 {
                    log::info!(
                        "found discontinuity in residue numbering: {} -> {} ({} -> {})",
                        last_label,
                        res_label,
                        last_num,
                        atom_num
                    );
                    if let Some(start) = start_res {
                        segments.push(Segment::new(start, last_label));
                    }
                    start_res = None;
                }
            }
        }

        if start_res.is_none() {
            start_res = Some(res_label);
        }
        end_res = Some(res_label);

        last_res_label = Some(res_label);
        last_atom_num = Some(atom_num);
    }

    match (start_res, end_res) {
        (Some(start), Some(end)) => {
            segments.push(Segment::new(start, end));
            Some(Chopping::new(segments))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    /// One atom per residue, serial numbers contiguous within each run.
    fn atoms(runs: &[(i32, i32, u32)]) -> Vec<(ResidueLabel, u32)> {
        let mut records = Vec::new();
        for &(from, to, first_serial) in runs {
            let mut serial = first_serial;
            for num in from..=to {
                records.push((ResidueLabel::new(num, None), serial));
                serial += 1;
            }
        }
        records
    }

    #[rstest]
    fn test_contiguous_chain_is_one_segment() {
        let chopping = guess_chopping(atoms(&[(1, 50, 1)]), true).unwrap();
        assert_eq!(chopping.to_str(), "1-50");
    }

    #[rstest]
    fn test_serial_gap_splits_segments() {
        // residues 135-159 then 198-366, with an atom-serial jump between
        let chopping = guess_chopping(atoms(&[(135, 159, 1), (198, 366, 500)]), true).unwrap();
        assert_eq!(chopping.to_str(), "135-159_198-366");
    }

    #[rstest]
    fn test_label_jump_without_serial_gap_is_kept() {
        // numbering jumps but atoms stay contiguous: same segment
        let chopping = guess_chopping(atoms(&[(135, 159, 1), (198, 366, 26)]), true).unwrap();
        assert_eq!(chopping.to_str(), "135-366");
    }

    #[rstest]
    fn test_single_spanning_segment_when_disabled() {
        let chopping = guess_chopping(atoms(&[(135, 159, 1), (198, 366, 500)]), false).unwrap();
        assert_eq!(chopping.to_str(), "135-366");
    }

    #[rstest]
    fn test_empty_stream() {
        assert!(guess_chopping(Vec::new(), true).is_none());
    }

    #[rstest]
    fn test_multi_atom_residues() {
        // three atoms per residue; a break between residues 10 and 30
        let mut records = Vec::new();
        let mut serial = 1;
        for num in 9..=10 {
            for _ in 0..3 {
                records.push((ResidueLabel::new(num, None), serial));
                serial += 1;
            }
        }
        serial += 100;
        for num in 30..=31 {
            for _ in 0..3 {
                records.push((ResidueLabel::new(num, None), serial));
                serial += 1;
            }
        }
        let chopping = guess_chopping(records, true).unwrap();
        assert_eq!(chopping.to_str(), "9-10_30-31");
    }
}
