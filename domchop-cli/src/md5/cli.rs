use clap::{Arg, Command};

pub const MD5_CMD: &str = "md5";

pub fn create_md5_cli() -> Command {
    Command::new(MD5_CMD)
        .about("Calculate MD5 digests of sequences in a FASTA file.")
        .arg(
            Arg::new("fasta")
                .long("fasta")
                .required(true)
                .help("Input: FASTA file (plain or gzipped)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output: TSV file of (id, md5) rows; defaults to stdout"),
        )
}
