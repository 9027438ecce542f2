use crate::baselines::Baseline;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("missing required column (path={}, column={column})", .path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("error parsing results file (path={}, error={source})", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cohort has no rows (cohort={0})")]
    EmptyCohort(Baseline),
    #[error("node counts must be positive to use a log scale (min={0})")]
    NonPositiveNodes(u64),
    #[error("i/o error (path={}, error={source})", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error rendering chart (path={}, reason={reason})", .path.display())]
    Render { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
