use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use self::{
    attenuation::AttenuationCommandArg, report::ReportArg, wind_stats::WindStatsArg,
};

mod attenuation;
mod params;
mod report;
mod wind_stats;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize wind speed records from a CSV file
    WindStats(#[clap(flatten)] WindStatsArg),
    /// Compute sound pressure level attenuation with distance
    Attenuation(#[clap(flatten)] AttenuationCommandArg),
    /// Run the wind speed and attenuation analyses together
    Report(#[clap(flatten)] ReportArg),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);
    match args.mode {
        Mode::WindStats(arg) => wind_stats::run(&arg)?,
        Mode::Attenuation(arg) => attenuation::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}
