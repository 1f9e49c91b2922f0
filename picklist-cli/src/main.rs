mod app;
mod commands;
mod error;
mod page;

use std::fs::File;
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

fn init_logging(verbose: bool, log_file: Option<&PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?)?,
        None => WriteLogger::init(level, Config::default(), std::io::stderr())?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = app::build_cli().get_matches();

    init_logging(
        matches.get_flag("verbose"),
        matches.get_one::<PathBuf>("log"),
    )?;

    commands::run_command(&matches)?;

    Ok(())
}
