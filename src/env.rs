use std::{env, io, path::PathBuf};

pub struct Env {}

impl Env {
    pub const SYS_NAME: &'static str = "incplot";
    pub const DEFAULT_CSV_FILE: &'static str = "result.csv";
    pub const RESULTS_DIR_NAME: &'static str = "results";

    pub fn proj_root() -> io::Result<PathBuf> {
        env::current_dir()
    }

    /// Directory where all the charts are written to. It lives under the
    /// current working directory, and is created on demand by the plotting
    /// code.
    pub fn results_root() -> io::Result<PathBuf> {
        let mut path = Self::proj_root()?;
        path.push(Self::RESULTS_DIR_NAME);
        Ok(path)
    }
}
