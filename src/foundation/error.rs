/// Result alias used throughout the crate.
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors raised while configuring, building, rendering or encoding symbol-insertion tasks.
///
/// Every variant except `Encode` and `Other` is raised before the first frame is rendered, so a
/// failure never leaves partial artifacts behind.
#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    /// The symbol set cannot supply a sequence plus one distinct inserted symbol.
    #[error("insufficient symbols: need {requested} distinct symbols, set has {available}")]
    InsufficientSymbols {
        /// Distinct symbols required (sequence length + 1).
        requested: usize,
        /// Distinct symbols available in the configured set.
        available: usize,
    },

    /// More distinct symbols appear in a task than the palette has colors.
    #[error("palette exhausted: need {requested} colors, palette has {available}")]
    PaletteExhausted {
        /// Colors required (distinct symbols in the task).
        requested: usize,
        /// Colors in the palette.
        available: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A glyph font could not be located or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Frame sink or video encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// I/O and other failures with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TaskError {
    /// Build an [`TaskError::InvalidConfiguration`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`TaskError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`TaskError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
