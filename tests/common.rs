use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn memo2md() -> Command {
    cargo_bin_cmd!("memo2md")
}

/// One memo block in the exported page layout
pub fn memo(time: &str, content: &str) -> String {
    format!(
        "<div class=\"memo\">\n  <div class=\"time\">{}</div>\n  <div class=\"content\">{}</div>\n</div>\n",
        time, content
    )
}

/// Write `index.html` into `dir` containing the given memo blocks
pub fn write_index(dir: &Path, memos: &[String]) {
    let html = format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"></head><body>\n{}</body></html>\n",
        memos.concat()
    );
    fs::write(dir.join("index.html"), html).unwrap();
}

#[allow(dead_code)]
pub fn read_memo(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join("memos").join(name)).unwrap()
}
