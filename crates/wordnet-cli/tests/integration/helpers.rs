//! Integration test helpers: real files, real binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_STRUCTURAL: i32 = 2;

pub const SYNSETS: &str = "\
0,entity,that which exists
1,animal beast,a living organism
2,dog domestic_dog,a canine
3,cat,a feline
4,stone rock,a lump of mineral
";

pub const HYPERNYMS: &str = "1,0\n2,1\n3,1\n4,0\n";

pub const DIGRAPH1: &str = "13\n11\n7 3\n8 3\n3 1\n4 1\n5 1\n9 5\n10 5\n11 10\n12 10\n1 0\n2 0\n";

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Temp dir holding `synsets.txt` and `hypernyms.txt`.
pub fn wordnet_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(dir.path(), "synsets.txt", SYNSETS);
    write_file(dir.path(), "hypernyms.txt", HYPERNYMS);
    dir
}

/// Run the binary in `cwd` with `args`, feeding `stdin`.
pub fn run_cli(cwd: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordnet"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn wordnet binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for wordnet binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn exit_code(output: &Output) -> i32 {
    output.status.code().unwrap_or(-1)
}
