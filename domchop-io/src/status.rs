use std::io::Write;

use domchop_core::models::summary::StatusLog;

use crate::error::DomainIoError;

///
/// Writer for batch status logs: one tab-separated row per processed
/// input (`entry_id`, `status`, `error`, `description`).
///
pub struct StatusLogWriter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> StatusLogWriter<W> {
    pub fn new(writer: W) -> Self {
        StatusLogWriter {
            wtr: csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer),
        }
    }

    pub fn write_status(&mut self, entry: &StatusLog) -> Result<(), DomainIoError> {
        self.wtr.serialize(entry)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), DomainIoError> {
        self.wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_write_status_log() {
        let mut buf = Vec::new();
        let mut writer = StatusLogWriter::new(&mut buf);
        writer
            .write_status(&StatusLog::success("AF-P00520-F1-model_v3/1-100", "adjusted"))
            .unwrap();
        writer
            .write_status(&StatusLog::error(
                "AF-P00521-F1-model_v3/800-1123",
                "NoMatchingResidues",
                "not adjusted",
            ))
            .unwrap();
        writer.flush().unwrap();
        drop(writer);

        let written = String::from_utf8(buf).unwrap();
        assert_eq!(
            written,
            "entry_id\tstatus\terror\tdescription\n\
             AF-P00520-F1-model_v3/1-100\tSUCCESS\t\tadjusted\n\
             AF-P00521-F1-model_v3/800-1123\tERROR\tNoMatchingResidues\tnot adjusted\n"
        );
    }
}
