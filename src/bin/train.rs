//! Train a linear regression model on a CSV dataset.
//!
//! Usage: `mbgd-train <dataset.csv>`
//!
//! The last column of each row is the target; all preceding columns are
//! features.

use std::process::ExitCode;

use mbgd::{load_csv, run_with_threads, MbgdParams, MbgdTrainer};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: mbgd-train <dataset.csv>");
        return ExitCode::FAILURE;
    };

    let dataset = match load_csv(&path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("Failed to load '{}': {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    let trainer = MbgdTrainer::new(MbgdParams::default());
    run_with_threads(0, |parallelism| trainer.train(&dataset, parallelism));

    ExitCode::SUCCESS
}
