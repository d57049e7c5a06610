//! Scan configuration.

/// Default line-length threshold. Lines strictly longer than this are flagged.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum line length in characters before a line is reported as long
    pub max_line_length: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl ScanConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum line length
    pub fn with_max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }
}
