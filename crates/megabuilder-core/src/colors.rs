//! ANSI color codes for table dumps and traces.
//!
//! - Blue: state labels
//! - Green: accepting-state markers and accepted calls
//! - Red: rejected calls
//! - Dim: arrows and bookkeeping
//! - Reset: return to default

/// ANSI palette. Standard 16-color codes only, readable on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub state: &'static str,
    pub accept: &'static str,
    pub error: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        state: "\x1b[34m",
        accept: "\x1b[32m",
        error: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        state: "",
        accept: "",
        error: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
