//! OSD CLI - Command line tool for cruise CTD sounding data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "osd-cli",
    version,
    about = "Ocean sounding dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: osd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    osd_cmd::run(cli.command)
}
