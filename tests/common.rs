#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rcontainerlog")
}

/// Unique config path inside the system temp dir; any existing file is removed
/// so the run starts from defaults and never reads the user's real config.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcontainerlog.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcontainerlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a shell session fed with `lines` on stdin.
pub fn shell(cfg_path: &str, lines: &[&str]) -> Command {
    let mut cmd = rcl();
    cmd.args(["--config", cfg_path, "shell", "--no-color"])
        .write_stdin(format!("{}\n", lines.join("\n")));
    cmd
}

/// Two records used by many tests: C1 at Ålesund, C2 at Molde.
pub const TWO_RECORDS: [&str; 2] = [
    "add --port Ålesund --container C1 --status empty --time 08:00 --date 2025-09-01",
    "add --port Molde --container C2 --status ADR --time 09:15 --date 2025-09-01",
];
