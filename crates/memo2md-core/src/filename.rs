//! Output file naming
//!
//! The base name comes from the first line of the converted body, reduced to
//! ASCII alphanumerics, CJK ideographs and whitespace.

use std::path::{Path, PathBuf};

const EXTENSION: &str = "md";

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c) || c.is_whitespace()
}

/// Derive a file base name from a memo body.
///
/// Takes the first line, drops disallowed characters, trims, then keeps at
/// most `max_len` characters. Falls back to `fallback` when nothing is left.
pub fn derive_base_name(body: &str, max_len: usize, fallback: &str) -> String {
    let first_line = body.split(['\n', '\r']).next().unwrap_or_default();
    let sanitized: String = first_line.chars().filter(|&c| is_kept(c)).collect();
    let base: String = sanitized.trim().chars().take(max_len).collect();

    if base.is_empty() {
        fallback.to_string()
    } else {
        base
    }
}

/// File name for the `attempt`-th candidate: `base.md`, then `base_1.md`, ...
fn candidate_name(base: &str, attempt: usize) -> String {
    if attempt == 0 {
        format!("{base}.{EXTENSION}")
    } else {
        format!("{base}_{attempt}.{EXTENSION}")
    }
}

/// First candidate path in `dir` for which `taken` returns false.
///
/// The check is sequential and not safe against concurrent writers to the
/// same directory.
pub fn unique_path_with<F>(dir: &Path, base: &str, taken: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let mut attempt = 0;
    loop {
        let path = dir.join(candidate_name(base, attempt));
        if !taken(&path) {
            return path;
        }
        attempt += 1;
    }
}

/// First candidate path in `dir` that does not exist on disk
pub fn unique_path(dir: &Path, base: &str) -> PathBuf {
    unique_path_with(dir, base, Path::exists)
}
