//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show data, status lines, warnings and errors.
    #[default]
    Normal,
    /// Show data and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages (success, warning).
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
