//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. Only stderr is ever colored; stdout
//! carries scripts and JSON that other programs consume.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

// Ember (error/danger): #B87060
const EMBER: (u8, u8, u8) = (184, 112, 96);

// Text muted: #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

/// Apply error styling (ember red, for stderr messages).
pub fn error(text: &str) -> String {
    text.if_supports_color(Stderr, |t| t.truecolor(EMBER.0, EMBER.1, EMBER.2))
        .to_string()
}

/// Apply muted gray (hints on stderr).
pub fn muted(text: &str) -> String {
    text.if_supports_color(Stderr, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}
