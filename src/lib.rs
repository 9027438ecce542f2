//! # incplot
//!
//! Render the charts comparing in-network computing (INC) against the
//! traditional set-up from the results the fat-tree simulator appends to its
//! CSV file. Each metric gets its own chart with the number of computing
//! nodes on a log-scaled x axis.

pub mod baselines;
pub mod data;
pub mod env;
pub mod error;
pub mod metrics;
pub mod plot;

use error::Result;
use std::path::{Path, PathBuf};

/// Load `csv_file_path`, split it by the `INC` flag, and render every chart
/// into `results_dir`.
pub fn visualize_data(csv_file_path: &Path, results_dir: &Path) -> Result<Vec<PathBuf>> {
    let results = data::load(csv_file_path)?;
    let (inc_enabled, traditional) = data::split(&results);

    plot::plot_all(&inc_enabled, &traditional, results_dir)
}
