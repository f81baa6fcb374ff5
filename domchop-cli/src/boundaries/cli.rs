use clap::{Arg, Command, value_parser};

pub const BOUNDARIES_CMD: &str = "boundaries";

pub fn create_boundaries_cli() -> Command {
    Command::new(BOUNDARIES_CMD)
        .about("Adjust domain boundaries by removing low-confidence tails.")
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
            Arg::new("output-list")
                .long("output-list")
                .required(true)
                .help("Output: TSV file of domain ids after tail trimming"),
        )
        .arg(
            Arg::new("output-mapping")
                .long("output-mapping")
                .required(true)
                .help("Output: TSV mapping of domain ids before/after tail trimming"),
        )
        .arg(
            Arg::new("status-log")
                .long("status-log")
                .help("Output: TSV status log, one row per input entry"),
        )
        .arg(
            Arg::new("cutoff")
                .long("cutoff")
                .value_parser(value_parser!(f64))
                .default_value("70")
                .help("pLDDT cutoff: residues at or below this score are trimmed"),
        )
}
