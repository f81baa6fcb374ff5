use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use domchop_boundaries::{BoundaryError, optimise_boundaries};
use domchop_core::models::summary::StatusLog;
use domchop_core::{ChainId, DomainId};
use domchop_io::{
    DomainListWriter, MappingWriter, PlddtTable, StatusLogWriter, read_af_domain_ids,
};

/// What happened to one domain entry.
enum Outcome {
    Trimmed(DomainId),
    NotAdjusted,
    Failed(String),
}

pub fn run_boundaries(matches: &ArgMatches) -> Result<()> {
    let domain_list = matches
        .get_one::<String>("domain-list")
        .expect("A path to a domain list file is required.");
    let plddt_dir = matches
        .get_one::<String>("plddt-dir")
        .expect("A path to a pLDDT table directory is required.");
    let output_list = matches
        .get_one::<String>("output-list")
        .expect("A path to the output list file is required.");
    let output_mapping = matches
        .get_one::<String>("output-mapping")
        .expect("A path to the output mapping file is required.");
    let status_log = matches.get_one::<String>("status-log");
    let cutoff = *matches.get_one::<f64>("cutoff").unwrap();

    let plddt_dir = Path::new(plddt_dir);

    let list_file = File::open(domain_list)
        .with_context(|| format!("Failed to open domain list: {}", domain_list))?;
    let domain_ids = read_af_domain_ids(list_file)?;

    println!(
        "Chopping tails from AF domains (plddt_dir={}, in_file={}, out_file={}, cutoff={}) ...",
        plddt_dir.display(),
        domain_list,
        output_list,
        cutoff
    );

    let pb = ProgressBar::new(domain_ids.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap(),
    );
    pb.set_message("Trimming domain tails");

    // per-domain work only reads its own pLDDT table, so the batch fans
    // out; all writers run after the parallel section, in input order
    let outcomes: Vec<Outcome> = domain_ids
        .par_iter()
        .map(|domain_id| {
            let outcome = trim_one(domain_id, plddt_dir, cutoff);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_and_clear();

    let mut list_writer = DomainListWriter::new(BufWriter::new(
        File::create(output_list)
            .with_context(|| format!("Failed to create output list: {}", output_list))?,
    ));
    let mut mapping_writer = MappingWriter::new(BufWriter::new(
        File::create(output_mapping)
            .with_context(|| format!("Failed to create output mapping: {}", output_mapping))?,
    ));
    let mut status_writer = match status_log {
        Some(path) => Some(StatusLogWriter::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create status log: {}", path))?,
        ))),
        None => None,
    };

    let mut trimmed_count = 0;
    let mut skipped_count = 0;
    let mut failed_count = 0;

    for (domain_id, outcome) in domain_ids.iter().zip(outcomes) {
        let entry_id = domain_id.to_string();
        let status = match outcome {
            Outcome::Trimmed(new_domain_id) => {
                list_writer.write_domain_id(&new_domain_id)?;
                mapping_writer.write_mapping(domain_id, &new_domain_id)?;
                trimmed_count += 1;
                StatusLog::success(&entry_id, "adjusted")
            }
            Outcome::NotAdjusted => {
                // keep the untrimmed chopping rather than dropping the entry
                list_writer.write_domain_id(domain_id)?;
                mapping_writer.write_mapping(domain_id, domain_id)?;
                skipped_count += 1;
                StatusLog::skipped(&entry_id, "not adjusted")
            }
            Outcome::Failed(err) => {
                failed_count += 1;
                StatusLog::error(&entry_id, &err, "failed to adjust boundaries")
            }
        };
        if let Some(writer) = status_writer.as_mut() {
            writer.write_status(&status)?;
        }
    }

    list_writer.flush()?;
    mapping_writer.flush()?;
    if let Some(writer) = status_writer.as_mut() {
        writer.flush()?;
    }

    println!(
        "DONE (adjusted={}, not_adjusted={}, failed={})",
        trimmed_count, skipped_count, failed_count
    );

    Ok(())
}

fn trim_one(domain_id: &DomainId, plddt_dir: &Path, cutoff: f64) -> Outcome {
    let table_path = match find_plddt_table(plddt_dir, &domain_id.chain_id) {
        Some(path) => path,
        None => {
            return Outcome::Failed(format!(
                "no pLDDT table for chain {} in {}",
                domain_id.chain_id,
                plddt_dir.display()
            ));
        }
    };

    let table = match PlddtTable::try_from(table_path.as_path()) {
        Ok(table) => table,
        Err(err) => return Outcome::Failed(err.to_string()),
    };

    match optimise_boundaries(&domain_id.chopping, |label| table.confidence(label), cutoff) {
        Ok(chopping) => Outcome::Trimmed(domain_id.with_chopping(chopping)),
        Err(BoundaryError::NoMatchingResidues(_)) => Outcome::NotAdjusted,
        Err(err) => Outcome::Failed(err.to_string()),
    }
}

fn find_plddt_table(plddt_dir: &Path, chain_id: &ChainId) -> Option<PathBuf> {
    ["plddt.tsv", "plddt.tsv.gz"]
        .iter()
        .map(|suffix| plddt_dir.join(format!("{}.{}", chain_id, suffix)))
        .find(|path| path.is_file())
}
