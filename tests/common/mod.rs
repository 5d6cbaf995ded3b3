#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::path::Path;
use std::process::Command;

/// The binary with the simulated latency switched off.
pub fn feedesk() -> Command {
    let mut cmd = Command::new(cargo_bin!("feedesk"));
    cmd.args(["--latency", "none"]);
    cmd
}

/// Checks the PDF header and returns the number of pages.
pub fn pdf_pages(path: &Path) -> usize {
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"), "{} is not a PDF", path.display());
    lopdf::Document::load_mem(&bytes).unwrap().get_pages().len()
}
