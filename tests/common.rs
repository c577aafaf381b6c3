#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pxh() -> Command {
    cargo_bin_cmd!("praxishours")
}

/// Create a unique schedule file path inside the system temp dir and remove
/// any existing file
pub fn setup_test_schedule(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_praxishours.json", name));
    let schedule_path = path.to_string_lossy().to_string();
    fs::remove_file(&schedule_path).ok();
    schedule_path
}

/// Initialize a schedule file with the default week
/// (Monday-Friday 09:00-17:00, weekend closed)
pub fn init_default_schedule(schedule_path: &str) {
    pxh()
        .args(["--schedule", schedule_path, "--test", "init"])
        .assert()
        .success();
}
