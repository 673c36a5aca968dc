// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

//! ANSI terminal colors for user-facing output.

pub const RESET: &str = "\x1b[0;0m";
pub const GREY: &str = "\x1b[0;90m";
pub const MINT: &str = "\x1b[38;5;48m";
pub const RED: &str = "\x1b[0;31m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const LAVENDER: &str = "\x1b[38;5;183m";

pub trait Color: std::fmt::Display {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }

    fn grey(&self) -> String {
        self.color(GREY)
    }

    fn mint(&self) -> String {
        self.color(MINT)
    }

    fn red(&self) -> String {
        self.color(RED)
    }

    fn yellow(&self) -> String {
        self.color(YELLOW)
    }

    fn lavender(&self) -> String {
        self.color(LAVENDER)
    }
}

impl<T: std::fmt::Display> Color for T {}
