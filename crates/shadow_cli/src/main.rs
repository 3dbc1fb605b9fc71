mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::Path;

use shadow_core::format::{
    parse_observables, parse_records, parse_subsystems, write_observables, write_procedure,
    RecordSet, SubsystemSet,
};
use shadow_core::{MeasurementProcedure, ObservableSet, ShadowError};
use shadow_derandomize::{schedule_with, DerandomizeConfig, ScheduleProblem};
use shadow_predict::{predict_observables, renyi_entropy};
use shadow_sampling::{ObservableGenerator, RandomSampler};

use crate::cli::{CliArgs, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Derandomize {
            per_observable,
            observables,
            config,
        } => {
            let config = match config {
                Some(path) => DerandomizeConfig::from_json_file(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => DerandomizeConfig::default(),
            };
            let set = parse_observables(&read(&observables)?)
                .with_context(|| format!("invalid observable file {}", observables.display()))?;
            let procedure = derandomize(set, per_observable, &config)?;
            write!(out, "{}", write_procedure(&procedure))?;
        }

        Command::Randomize {
            rounds,
            system_size,
            seed,
        } => {
            let mut sampler = match seed {
                Some(s) => RandomSampler::with_seed(s),
                None => RandomSampler::new(),
            };
            write!(out, "{}", write_procedure(&sampler.sample(rounds, system_size)))?;
        }

        Command::PredictObservables {
            measurements,
            observables,
        } => {
            let records = parse_records(&read(&measurements)?)
                .with_context(|| format!("invalid measurement file {}", measurements.display()))?;
            let set = parse_observables(&read(&observables)?)
                .with_context(|| format!("invalid observable file {}", observables.display()))?;

            for estimate in predict_observables(&records, &set)? {
                writeln!(out, "{}", estimate)?;
            }
        }

        Command::PredictEntropy {
            measurements,
            subsystems,
        } => {
            let records = parse_records(&read(&measurements)?)
                .with_context(|| format!("invalid measurement file {}", measurements.display()))?;
            let set = parse_subsystems(&read(&subsystems)?)
                .with_context(|| format!("invalid subsystem file {}", subsystems.display()))?;

            for entropy in predict_entropies(&records, &set, &subsystems)? {
                writeln!(out, "{:.6}", entropy)?;
            }
        }

        Command::Generate { system_size } => {
            let set = ObservableSet {
                system_size,
                observables: ObservableGenerator::new().correlator_suite(system_size),
                weights: None,
            };
            write!(out, "{}", write_observables(&set))?;
        }
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn derandomize(
    set: ObservableSet,
    per_observable: usize,
    config: &DerandomizeConfig,
) -> Result<MeasurementProcedure> {
    let problem = ScheduleProblem::from_set(set, per_observable)?;
    let schedule = schedule_with(&problem, config)?;
    info!(
        "{} rounds for {} observables ({:.1}% of targets reached)",
        schedule.rounds(),
        problem.len(),
        100.0 * schedule.coverage()
    );
    Ok(schedule.procedure)
}

/// Entropy of every subsystem in file order; errors name the failing subsystem
fn predict_entropies(records: &RecordSet, set: &SubsystemSet, source: &Path) -> Result<Vec<f64>> {
    if set.system_size != records.system_size {
        return Err(ShadowError::SystemSizeMismatch {
            expected: records.system_size,
            got: set.system_size,
        }
        .into());
    }

    set.subsystems
        .iter()
        .enumerate()
        .map(|(i, subsystem)| {
            renyi_entropy(&records.records, subsystem)
                .with_context(|| format!("subsystem {} of {}", i, source.display()))
        })
        .collect()
}
