use super::cancel::CancelToken;

/// Configuration options for artifact scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Maximum depth to descend below the root (None = unlimited)
    pub max_depth: Option<usize>,

    /// Number of threads used to size artifacts (0 = auto)
    pub threads: usize,

    /// Token checked at every directory boundary
    pub cancel: CancelToken,
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set number of sizing threads
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Attach a cancellation token
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }
}
