use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use once_cell::sync::Lazy;

use crate::config::Config;
use crate::io::cli::Cli;
use crate::io::ext_repr::Output;
use stowage::pack;

mod config;
mod io;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            Config::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed Config: {config:?}");

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let (containers, items) = io::import(&ext_instance)?;

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable file stem")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let mut fleet = match config.capacity_search {
        true => pack::pack_total(&containers, &items, &config.algorithms)?,
        false => pack::pack(&containers, &items, &config.algorithms)?,
    };
    //the service gives no container ordering guarantee, sort for stable output
    fleet.sort_by_container_id();

    let output = Output {
        instance: ext_instance,
        solution: io::export(&fleet, *EPOCH),
        config,
    };

    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, solution_path.as_path())?;

    Ok(())
}
