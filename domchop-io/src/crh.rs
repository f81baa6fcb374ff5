use std::io::Read;

use domchop_core::models::crh::Gene3DCrh;

use crate::error::DomainIoError;

///
/// Read a Gene3D CATH-resolve-hits (CRH) file: headerless tab-separated
/// rows of `sequence_md5  domain_sfam_id  bitscore  chopping_raw
/// chopping_final`.
///
pub fn read_gene3d_crh<R: Read>(reader: R) -> Result<Vec<Gene3DCrh>, DomainIoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: Gene3DCrh = result?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_read_gene3d_crh() {
        let input = "3ce18771b4195d6aad287c3965a3c4f8\t5ksdA01__1.20.1110.10/95-132_218-326_627-816\t1054.6\t95-132,218-326,627-816\t95-132,218-326,627-816\n";
        let rows = read_gene3d_crh(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sequence_md5, "3ce18771b4195d6aad287c3965a3c4f8");
        assert_eq!(rows[0].domain_id(), "5ksdA01");
        assert_eq!(rows[0].superfamily_id(), "1.20.1110.10");
        assert_eq!(rows[0].bitscore, 1054.6);
        assert_eq!(rows[0].chopping_raw, "95-132,218-326,627-816");
    }

    #[rstest]
    fn test_read_gene3d_crh_rejects_short_row() {
        let input = "md5only\n";
        assert!(read_gene3d_crh(input.as_bytes()).is_err());
    }
}
