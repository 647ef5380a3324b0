//! Collection lifecycle state

/// Lifecycle of a managed collection's cache
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load attempted yet
    #[default]
    Uninitialized,

    /// A load is in flight
    Loading,

    /// The cache reflects the last successful load
    Ready,

    /// The last load failed; any earlier cache is kept
    LoadError(String),
}

impl LoadState {
    /// Whether the cache reflects a successful load
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}
