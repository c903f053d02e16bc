use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// A scratch directory holding an executable `publish` shell script.
pub fn publish_dir(body: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_script(&dir, "publish", body);
    dir
}

pub fn write_script(dir: &TempDir, name: &str, body: &str) {
    let file = dir.child(name);
    file.write_str(&format!("#!/bin/sh\n{body}\n"))
        .expect("Failed to write script");
    std::fs::set_permissions(file.path(), std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark script executable");
}

pub fn gulp_publish(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gulp-publish").expect("Failed to find binary");
    cmd.current_dir(dir).env_remove("RUST_LOG").args(args);
    cmd
}
