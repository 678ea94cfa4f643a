use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for waypath isolated to `dir`: it runs there, and the global
/// config directory points at an empty location inside it.
pub fn waypath_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.current_dir(dir)
        .env("WAYPATH_CONFIG_DIR", dir.join("global-config"))
        .env_remove("RUST_LOG")
        .env_remove("WAYPATH_LOG")
        .env_remove("WAYPATH_LOG_LEVEL");
    cmd
}

/// Write the sample transport network as JSON and return its path
pub fn write_network(dir: &Path) -> PathBuf {
    let path = dir.join("network.json");
    fs::write(
        &path,
        r#"{
  "Lagos": ["Ibadan", "Abeokuta"],
  "Ibadan": ["Ilorin", "Osogbo"],
  "Abeokuta": ["Ondo"],
  "Osogbo": ["Akure"],
  "Ondo": ["Akure"],
  "Ilorin": ["Lokoja"],
  "Akure": [],
  "Lokoja": []
}"#,
    )
    .expect("write network");
    path
}

/// Write a 3x3 grid with the center blocked and return its path
pub fn write_grid(dir: &Path) -> PathBuf {
    let path = dir.join("grid.txt");
    fs::write(&path, "...\n.#.\n...\n").expect("write grid");
    path
}

/// Write a word list mixing lengths and return its path
pub fn write_words(dir: &Path) -> PathBuf {
    let path = dir.join("words.txt");
    fs::write(&path, "# classic ladder\nhot dot dog\nlot log cog\ncogs hits\n").expect("write words");
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
