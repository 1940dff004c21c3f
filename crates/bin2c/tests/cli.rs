#![expect(missing_docs)]

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use bin2c::{LOOKUP_TABLE, PACKED_TABLE_LEN};

fn bin2c(args: &[&str], buffer_size: Option<&str>, input: &[u8]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bin2c"));
    cmd.args(args)
        .env_remove("BIN2C_BUFFER_SIZE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(size) = buffer_size {
        cmd.env("BIN2C_BUFFER_SIZE", size);
    }

    let mut child = cmd.spawn().expect("spawn bin2c");
    // The child may exit before reading, closing the pipe.
    let _ = child.stdin.take().expect("piped stdin").write_all(input);
    child.wait_with_output().expect("wait for bin2c")
}

#[test]
fn emit_table_writes_packed_image() {
    let out = bin2c(&["--emit-table"], None, b"");
    assert!(out.status.success());
    assert_eq!(out.stdout.len(), PACKED_TABLE_LEN);
    assert_eq!(out.stdout, LOOKUP_TABLE.to_packed());
}

#[test]
fn buffer_size_from_environment() {
    let input = b"#include \"x.h\"\n\x7f?";
    let default = bin2c(&["blob"], None, input);
    let tiny = bin2c(&["blob"], Some("4"), input);
    assert!(default.status.success());
    assert!(tiny.status.success());
    assert_eq!(tiny.stdout, default.stdout);
}

#[test]
fn unusable_buffer_size_fails() {
    let out = bin2c(&[], Some("0"), b"data");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&out.stderr).contains("Invalid --buffer-size"),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let out = bin2c(&["--buffer-size", "3"], None, b"data");
    assert!(!out.status.success());
}
