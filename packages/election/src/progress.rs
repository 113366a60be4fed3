//! Progress reporting for the collection load.
//!
//! The loader reports one unit per parsed feature through
//! [`ProgressCallback`]. Front ends pick how to render it; the server
//! passes [`NullProgress`].

/// Receives progress updates while the collection loads.
pub trait ProgressCallback: Send + Sync {
    /// Set the total number of features once it is known.
    fn set_total(&self, total: u64);

    /// Advance progress by `delta` features.
    fn inc(&self, delta: u64);

    /// Update the status message (e.g. "Downloading", "Parsing").
    fn set_message(&self, msg: String);

    /// Mark the load as complete.
    fn finish(&self, msg: String);
}

/// Ignores all progress updates.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

