/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Greys out "Closed" cells so open days stand out in the week table.
pub fn colorize_hours(value: &str) -> String {
    if value.trim() == "Closed" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
