//! Process-wide logging for the stockroom binary and its tests.

/// Install the JSON log subscriber. Later calls keep the first one.
pub fn init() {
    tracing::init();
}

pub mod tracing;
