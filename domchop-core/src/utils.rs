use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use md5::{Digest, Md5};

use crate::errors::ModelError;
use crate::models::chopping::SeqresChopping;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// MD5 hex digest of a string, as used for sequence identity lookups.
pub fn str_md5(in_str: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(in_str);
    format!("{:x}", hasher.finalize())
}

///
/// Apply a chopping to a full sequence, concatenating the covered
/// subsequences in segment order. Positions are 1-based and inclusive,
/// matching chopping numbering.
///
pub fn chopped_sequence(sequence: &str, chopping: &SeqresChopping) -> Result<String, ModelError> {
    let mut chopped = String::new();
    for seg in &chopping.segments {
        let start = seg.start as usize;
        let end = seg.end as usize;
        if start == 0 || start > end || end > sequence.len() {
            return Err(ModelError::SegmentOutOfRange(
                seg.to_string(),
                sequence.len(),
            ));
        }
        chopped.push_str(&sequence[start - 1..end]);
    }
    Ok(chopped)
}

/// MD5 digest of the chopping-filtered subsequence.
pub fn chopped_sequence_md5(
    sequence: &str,
    chopping: &SeqresChopping,
) -> Result<String, ModelError> {
    Ok(str_md5(&chopped_sequence(sequence, chopping)?))
}
