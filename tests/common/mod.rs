use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary working directory for one test.
pub fn create_workdir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Convenience helper for spawning the invisible_ink binary via assert_cmd.
///
/// The key and editor variables are stripped so tests start hermetic; a test
/// that wants them sets them explicitly with `.env(...)`.
pub fn invisible_ink_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("invisible_ink");
    cmd.env_remove("INVISIBLE_INK_KEY");
    cmd.env_remove("EDITOR");
    cmd
}

/// Drop a fixed 32-character key file into the working directory.
#[allow(dead_code)]
pub fn write_key_file(dir: &Path) -> String {
    let key = "0123456789abcdef0123456789abcdef".to_string();
    fs::write(dir.join("invisible_ink.key"), &key).expect("failed to write key file");
    key
}

/// Write an executable shell script that stands in for $EDITOR.
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_editor(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("editor.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write editor script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("failed to chmod editor script");
    path
}
