//! ANSI color helpers for the seat grid.
use crate::models::color::SeatColor;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// 24-bit background escape for a seat color.
pub fn bg(color: &SeatColor) -> String {
    let (r, g, b) = color.rgb();
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// Black or white text, whichever reads better on `color`.
pub fn fg_for(color: &SeatColor) -> &'static str {
    let (r, g, b) = color.rgb();
    // ITU-R BT.601 luma
    let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    if luma > 128_000 {
        "\x1b[38;2;0;0;0m"
    } else {
        "\x1b[38;2;255;255;255m"
    }
}

/// Grey out placeholders such as an empty memo.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
