//! Input normalization for command lines.
//!
//! Registration paths and typed lines go through the same rules so that
//! `"config  set"` registers and resolves exactly like `"config set"`.

/// Normalizes a command line.
///
/// Trims leading and trailing whitespace and collapses every run of
/// whitespace inside the line to a single ASCII space. Normalizing an
/// already-normalized line returns it unchanged.
pub fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;

    for c in line.trim().chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

/// Splits a line into path segments.
///
/// Equivalent to normalizing and then splitting on single spaces; empty
/// input yields no segments.
pub fn segments(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
