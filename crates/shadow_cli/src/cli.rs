use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Classical shadow measurement toolkit.
///
/// Schedules Pauli measurements (derandomized or random) and predicts
/// observables and subsystem entropies from measurement records.
#[derive(Parser, Debug)]
#[command(name = "shadow", version, about = "Classical shadow measurement toolkit")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derandomized measurement schedule for the observables in a file
    Derandomize {
        /// Target number of measurements per observable
        per_observable: usize,

        /// Observable file (first line: system size)
        observables: PathBuf,

        /// JSON file with scheduler settings (eta, round_cap)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Uniformly random measurement bases
    Randomize {
        /// Number of rounds
        rounds: usize,

        /// Number of qubits
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        system_size: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Predict observable expectations from measurement records
    PredictObservables {
        /// Measurement-record file
        measurements: PathBuf,

        /// Observable file
        observables: PathBuf,
    },

    /// Predict second Rényi entropies of subsystems
    PredictEntropy {
        /// Measurement-record file
        measurements: PathBuf,

        /// Subsystem file
        subsystems: PathBuf,
    },

    /// Write the two-body correlator observable suite
    Generate {
        /// Number of qubits
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        system_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_derandomize() {
        let args = CliArgs::try_parse_from([
            "shadow",
            "derandomize",
            "50",
            "obs.txt",
            "--config",
            "eta.json",
        ])
        .unwrap();

        match args.command {
            Command::Derandomize {
                per_observable,
                observables,
                config,
            } => {
                assert_eq!(per_observable, 50);
                assert_eq!(observables, PathBuf::from("obs.txt"));
                assert_eq!(config, Some(PathBuf::from("eta.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_randomize() {
        let args = CliArgs::try_parse_from(["shadow", "randomize", "10", "4", "--seed", "7"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Randomize {
                rounds: 10,
                system_size: 4,
                seed: Some(7)
            }
        ));
    }

    #[test]
    fn test_parse_predict_entropy() {
        let args =
            CliArgs::try_parse_from(["shadow", "predict-entropy", "m.txt", "s.txt"]).unwrap();
        assert!(matches!(args.command, Command::PredictEntropy { .. }));
    }

    #[test]
    fn test_rejects_bad_count() {
        assert!(CliArgs::try_parse_from(["shadow", "derandomize", "many", "obs.txt"]).is_err());
        assert!(CliArgs::try_parse_from(["shadow", "randomize", "10"]).is_err());
    }

    #[test]
    fn test_rejects_empty_system() {
        assert!(CliArgs::try_parse_from(["shadow", "generate", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["shadow", "randomize", "10", "0"]).is_err());

        let args = CliArgs::try_parse_from(["shadow", "generate", "4"]).unwrap();
        assert!(matches!(args.command, Command::Generate { system_size: 4 }));
    }
}
