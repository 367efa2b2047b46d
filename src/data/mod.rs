//! Data containers and loading.
//!
//! - [`Dataset`]: immutable feature matrix plus regression targets
//! - [`load_csv`] / [`read_csv`]: delimited text ingestion
//! - [`DatasetError`]: loading failures

mod dataset;
mod error;
mod io;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use io::{load_csv, read_csv};
