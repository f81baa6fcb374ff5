use clap::{Arg, Command};

pub const PLDDT_SUMMARY_CMD: &str = "plddt-summary";

pub fn create_plddt_summary_cli() -> Command {
    Command::new(PLDDT_SUMMARY_CMD)
        .about("Summarise per-domain confidence: average pLDDT and LUR percentage.")
        .arg(
            Arg::new("domain-list")
                .long("domain-list")
                .required(true)
                .help("Input: TSV file of AF domain ids (header: af_domain_id)"),
        )
        .arg(
            Arg::new("plddt-dir")
                .long("plddt-dir")
                .required(true)
                .help("Input: directory of per-chain pLDDT tables (<af_chain_id>.plddt.tsv[.gz])"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .required(true)
                .help("Output: TSV file of per-domain confidence summaries"),
        )
}
