//! UI helper functions for terminal output formatting.

use std::io::Write;

use highcard_engine::game::Notice;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Transient status line, the terminal stand-in for a popup.
pub fn write_notice(out: &mut dyn Write, notice: &Notice) -> std::io::Result<()> {
    writeln!(out, ">> {}", notice.text)
}
