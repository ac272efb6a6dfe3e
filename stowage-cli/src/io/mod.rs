use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use log::{Level, LevelFilter, info, log};
use serde::Serialize;

use crate::EPOCH;
use crate::io::ext_repr::{
    ExtContainerResult, ExtInstance, ExtPlacement, ExtRun, ExtSolution,
};
use stowage::entities::{Container, FleetResult, Item};

pub mod cli;
pub mod ext_repr;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// Converts the external instance into the library's entities,
/// validating the geometry on the way in.
pub fn import(ext_instance: &ExtInstance) -> Result<(Vec<Container>, Vec<Item>)> {
    let containers = ext_instance
        .containers
        .iter()
        .map(|ext| {
            ensure!(
                ext.length > 0.0 && ext.width > 0.0 && ext.height > 0.0,
                "container {} must have positive dimensions",
                ext.id
            );
            Ok(Container::new(ext.id as usize, ext.length, ext.width, ext.height))
        })
        .collect::<Result<Vec<_>>>()?;

    let items = ext_instance
        .items
        .iter()
        .map(|ext| {
            ensure!(
                ext.length > 0.0 && ext.width > 0.0 && ext.height > 0.0,
                "item {} must have positive dimensions",
                ext.id
            );
            Ok(Item::new(
                ext.id as usize,
                ext.length,
                ext.width,
                ext.height,
                ext.quantity as usize,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((containers, items))
}

/// Exports a fleet result out of the library
pub fn export(fleet: &FleetResult, epoch: Instant) -> ExtSolution {
    ExtSolution {
        containers: fleet
            .containers
            .iter()
            .map(|cr| ExtContainerResult {
                container_id: cr.container_id as u64,
                runs: cr
                    .runs
                    .iter()
                    .map(|run| ExtRun {
                        algorithm: run.algorithm.name().to_string(),
                        complete: run.outcome.complete,
                        packed_units: run.outcome.packed.len() as u64,
                        unpacked_units: run.outcome.unpacked.len() as u64,
                        pct_container_volume: run.pct_container_volume,
                        pct_item_volume: run.pct_item_volume,
                        run_time_ms: run.elapsed.as_secs_f64() * 1000.0,
                        max_uniform_qty: run.max_uniform_qty,
                        placements: run
                            .outcome
                            .packed
                            .iter()
                            .map(|p| ExtPlacement {
                                item_id: p.item_id as u64,
                                x: p.x,
                                y: p.y,
                                z: p.z,
                                length: p.o_length,
                                width: p.o_width,
                                height: p.o_height,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
        run_time_sec: epoch.elapsed().as_secs(),
    }
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "solution written to {:?}",
        fs::canonicalize(path).context("could not canonicalize path")?
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    log!(Level::Info, "logger initialized");
    Ok(())
}
