//! Output mode and writer.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show probe status lines and the final summary.
    #[default]
    Normal,
    /// Show the final summary only.
    Quiet,
    /// Show nothing (machine-readable output is emitted separately).
    Silent,
}

impl OutputMode {
    /// Check if this mode shows probe status lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows the final summary line.
    pub fn shows_summary(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a probe status line if the mode allows it.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write the final summary line if the mode allows it.
    pub fn summary(&self, msg: &str) {
        if self.mode.shows_summary() {
            println!("{}", msg);
        }
    }
}
