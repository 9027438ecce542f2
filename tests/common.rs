use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub const HEADER: &str =
    "INC,Ports,CompNodes,TotalTicks,TimingCost,BandwidthUsage_Msg,BandwidthUsage_Byte,ComplTimeDiff";

/// Results as the simulator writes them for 4, 8 and 16 ports per switch.
pub const SWEEP_ROWS: &str = "\
1,4,16,212,37,240,15360,4
0,4,16,301,58,496,31744,13
1,8,128,402,61,1984,126976,6
0,8,128,755,112,4032,258048,41
1,16,1024,820,86,16128,1032192,9
0,16,1024,2311,207,32512,2080768,118
";

pub fn write_results(dir: &Path, file_name: &str, rows: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, format!("{HEADER}\n{rows}")).unwrap();
    path
}

/// Run the `incplot` binary from `cwd` with the given arguments.
pub fn run_incplot(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_incplot"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

pub fn chart_names(results_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(results_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
