// 🖨️ Console output helpers
// Every demo writes to a caller-supplied sink so the binary can pass stdout
// and tests can pass a Vec<u8>.

use anyhow::Result;
use std::io::Write;

pub const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Write a single demonstration line
pub fn line(out: &mut dyn Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Label line followed by one line per capability result
pub fn labelled(out: &mut dyn Write, label: &str, results: &[&str]) -> Result<()> {
    line(out, label)?;
    for result in results {
        line(out, result)?;
    }
    Ok(())
}

pub fn banner(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

pub fn section(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out, "\n{}", title)?;
    Ok(())
}

pub fn footer(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n{}", SEPARATOR)?;
    Ok(())
}

/// Split captured output into lines (test helper)
#[cfg(test)]
pub(crate) fn captured_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| l.to_string())
        .collect()
}
