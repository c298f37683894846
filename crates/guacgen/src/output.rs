//! stdout delivery
//!
//! Rendered artifact text is the only thing that goes to stdout; all
//! diagnostics go to stderr so shell consumers can capture the artifact
//! directly.

use std::io::{self, Write};

/// Write rendered text to stdout, adding a trailing newline if missing
pub fn emit_rendered(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}
