/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const BROWN: &str = "\x1b[38;5;94m";

/// Reminder card color: red when a coffee is due, brown otherwise.
pub fn color_for_due(due: bool) -> &'static str {
    if due { RED } else { BROWN }
}

/// Greys out empty values and the `--:--` placeholder.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
