//! Output formatting for CLI.

use euler_bench_core::ExperimentTable;
use std::io::{self, Write};

/// Write a suite title, an underline, and the ranked rows, followed by a blank line.
pub fn write_table<W: Write>(out: &mut W, title: &str, table: &ExperimentTable<'_>) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    for line in table.render() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}
