//! Uniform, colored status lines for CLI output.
//!
//! Info, success and warning go to stdout; errors go to stderr so piped
//! `list --json` output stays clean.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => BLUE,
            Tone::Success => GREEN,
            Tone::Warning => YELLOW,
            Tone::Error => RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn render<T: fmt::Display>(tone: Tone, msg: T) -> String {
    format!("{}{}{}{} {}", tone.color(), BOLD, tone.icon(), RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Tone::Error, msg));
}
