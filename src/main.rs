use clap::{error::ErrorKind, Parser};
use env_logger::Builder;
use incplot::{env::Env, error::ReportError};
use log::info;
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(about = "Plot INC-enabled vs traditional simulation results")]
struct Cli {
    /// CSV file with one row per simulation run
    #[arg(default_value = Env::DEFAULT_CSV_FILE)]
    csv_file_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger.
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    let mut builder = Builder::from_env(env);
    builder.init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("Usage: {} [<csv_file_path>]", Env::SYS_NAME);
            process::exit(1);
        }
    };

    let results_dir = Env::results_root()?;
    match incplot::visualize_data(&cli.csv_file_path, &results_dir) {
        Ok(plot_paths) => {
            info!(
                "{}: generated {} plots in {}",
                Env::SYS_NAME,
                plot_paths.len(),
                results_dir.display()
            );
            Ok(())
        }
        Err(ReportError::FileNotFound(path)) => {
            println!("File not found: {}", path.display());
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
