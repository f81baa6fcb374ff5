mod boundaries;
mod md5;
mod plddt;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "domchop";
    pub const BIN_NAME: &str = "domchop";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Tools for assigning and refining structural domain boundaries on AlphaFold-predicted protein chains.")
        .subcommand_required(true)
        .subcommand(boundaries::cli::create_boundaries_cli())
        .subcommand(plddt::cli::create_plddt_summary_cli())
        .subcommand(md5::cli::create_md5_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // BOUNDARIES
        //
        Some((boundaries::cli::BOUNDARIES_CMD, matches)) => {
            boundaries::handlers::run_boundaries(matches)?;
        }

        //
        // PLDDT SUMMARY
        //
        Some((plddt::cli::PLDDT_SUMMARY_CMD, matches)) => {
            plddt::handlers::run_plddt_summary(matches)?;
        }

        //
        // SEQUENCE MD5
        //
        Some((md5::cli::MD5_CMD, matches)) => {
            md5::handlers::run_md5(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
