//! Command implementations for the OSD CLI.
//!
//! Provides subcommands for building the station location index from raw
//! ct1 profile files and for inspecting individual profiles.

use clap::Subcommand;

pub mod index;
pub mod inspect;

#[derive(Subcommand)]
pub enum Command {
    /// Scan a directory of ct1 profile files and build the location index
    BuildIndex {
        /// Directory containing the raw ct1 CSV files
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,

        /// Output path for the location index CSV
        #[arg(short = 'o', long, default_value = "data/latlong-list.csv")]
        output: String,
    },

    /// Parse a single profile file and print a summary
    Inspect {
        /// Path to a ct1 profile CSV file
        #[arg(short = 'f', long)]
        file: String,

        /// Keep the final data row instead of trimming it as a footer
        #[arg(long)]
        keep_footer: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::BuildIndex { data_dir, output } => index::run_build_index(&data_dir, &output),
        Command::Inspect { file, keep_footer } => inspect::run_inspect(&file, keep_footer),
    }
}
