use std::io::{Read, Write};

use serde::Serialize;

use domchop_core::DomainId;

use crate::error::DomainIoError;

const DOMAIN_LIST_FIELDNAMES: [&str; 1] = ["af_domain_id"];

///
/// Read a tab-separated domain list (one header line `af_domain_id`, one
/// domain id per row) into parsed [DomainId]s. A wrong header fails fast;
/// so does any row that does not parse.
///
pub fn read_af_domain_ids<R: Read>(reader: R) -> Result<Vec<DomainId>, DomainIoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().collect::<Vec<_>>() != DOMAIN_LIST_FIELDNAMES {
        return Err(DomainIoError::CsvHeader {
            expected: DOMAIN_LIST_FIELDNAMES.map(String::from).to_vec(),
            found: headers.iter().map(String::from).collect(),
        });
    }

    let mut domain_ids = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let raw = record.get(0).unwrap_or_default();
        domain_ids.push(raw.parse::<DomainId>()?);
    }
    Ok(domain_ids)
}

#[derive(Serialize)]
struct DomainListRow<'a> {
    af_domain_id: &'a str,
}

/// Writer for a post-tailchop domain list (`af_domain_id` column).
pub struct DomainListWriter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> DomainListWriter<W> {
    pub fn new(writer: W) -> Self {
        DomainListWriter {
            wtr: csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer),
        }
    }

    pub fn write_domain_id(&mut self, domain_id: &DomainId) -> Result<(), DomainIoError> {
        self.wtr.serialize(DomainListRow {
            af_domain_id: &domain_id.to_string(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), DomainIoError> {
        self.wtr.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MappingRow<'a> {
    af_domain_id_orig: &'a str,
    af_domain_id_post_tailchop: &'a str,
}

/// Writer for the before/after mapping produced by tail trimming.
pub struct MappingWriter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> MappingWriter<W> {
    pub fn new(writer: W) -> Self {
        MappingWriter {
            wtr: csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer),
        }
    }

    pub fn write_mapping(
        &mut self,
        orig: &DomainId,
        post_tailchop: &DomainId,
    ) -> Result<(), DomainIoError> {
        self.wtr.serialize(MappingRow {
            af_domain_id_orig: &orig.to_string(),
            af_domain_id_post_tailchop: &post_tailchop.to_string(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), DomainIoError> {
        self.wtr.flush()?;
        Ok(())
    }
}
