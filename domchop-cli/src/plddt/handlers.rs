use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use rayon::prelude::*;

use domchop_boundaries::plddt_summary;
use domchop_core::models::summary::PlddtSummary;
use domchop_io::{PlddtSummaryWriter, PlddtTable, read_af_domain_ids};

pub fn run_plddt_summary(matches: &ArgMatches) -> Result<()> {
    let domain_list = matches
        .get_one::<String>("domain-list")
        .expect("A path to a domain list file is required.");
    let plddt_dir = matches
        .get_one::<String>("plddt-dir")
        .expect("A path to a pLDDT table directory is required.");
    let output = matches
        .get_one::<String>("output")
        .expect("A path to the output file is required.");

    let plddt_dir = Path::new(plddt_dir);

    let list_file = File::open(domain_list)
        .with_context(|| format!("Failed to open domain list: {}", domain_list))?;
    let domain_ids = read_af_domain_ids(list_file)?;

    let summaries: Vec<Result<PlddtSummary>> = domain_ids
        .par_iter()
        .map(|domain_id| {
            let table_path = plddt_dir.join(format!("{}.plddt.tsv", domain_id.chain_id));
            let table = PlddtTable::try_from(table_path.as_path())?;
            let summary = plddt_summary(domain_id, |label| table.confidence(label))?;
            Ok(summary)
        })
        .collect();

    let mut summary_writer = PlddtSummaryWriter::new(BufWriter::new(
        File::create(output).with_context(|| format!("Failed to create output: {}", output))?,
    ));

    let mut failed_count = 0;
    for (domain_id, summary) in domain_ids.iter().zip(summaries) {
        match summary {
            Ok(summary) => summary_writer.write_summary(&summary)?,
            Err(err) => {
                failed_count += 1;
                eprintln!("Warning: skipping {}: {}", domain_id, err);
            }
        }
    }
    summary_writer.flush()?;

    println!(
        "DONE (summaries={}, failed={})",
        domain_ids.len() - failed_count,
        failed_count
    );

    Ok(())
}
