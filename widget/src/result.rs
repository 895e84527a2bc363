//! Result type used by the [`landportal_widget`](super) crate

/// Result type used by the [`landportal_widget`](super) crate
pub type Result<T> = std::result::Result<T, crate::error::Error>;
