use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use domchop_io::sequence_md5s_from_fasta;

pub fn run_md5(matches: &ArgMatches) -> Result<()> {
    let fasta = matches
        .get_one::<String>("fasta")
        .expect("A path to a FASTA file is required.");
    let output = matches.get_one::<String>("output");

    let digests = sequence_md5s_from_fasta(Path::new(fasta))?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output: {}", path))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    writeln!(writer, "id\tsequence_md5")?;
    for (id, md5) in &digests {
        writeln!(writer, "{}\t{}", id, md5)?;
    }
    writer.flush()?;

    Ok(())
}
