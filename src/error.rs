//! Configuration error types.

/// Reasons a [`GameConfig`](crate::GameConfig) cannot drive a session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A quantity that must be strictly positive was zero or negative.
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    /// A tolerance or weight that must not be negative was negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    /// The terrain needs at least one segment.
    #[error("terrain must have at least one segment")]
    NoTerrainSegments,

    /// The pad plus its margins is wider than the screen.
    #[error("pad of width {pad_width} with margin {margin} does not fit a screen {screen_width} wide")]
    PadDoesNotFit {
        pad_width: f32,
        margin: f32,
        screen_width: f32,
    },

    /// The rugged terrain band is inverted or falls off screen.
    #[error("terrain band offsets {high}..{low} are invalid for a screen {screen_height} tall")]
    InvalidTerrainBand {
        high: f32,
        low: f32,
        screen_height: f32,
    },

    /// The pad surface would sit outside the screen.
    #[error("pad height offset {offset} is outside a screen {screen_height} tall")]
    PadOffScreen { offset: f32, screen_height: f32 },
}
