//! Reload-action adapters.
//!
//! A real editor host restarts itself when the user confirms the reload; in
//! that case control never returns to the workflow within the same session.
//! The CLI build cannot restart an editor, so its adapter only announces
//! that a reload is due.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use crate::application::ports::HostReloader;

/// [`HostReloader`] for the CLI build: logs the request and leaves the
/// actual restart to the embedding host (or the user).
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingReloader;

impl HostReloader for LoggingReloader {
    fn request_reload(&self) {
        info!("reload requested; restart the editor to apply the icon changes");
    }
}

/// [`HostReloader`] for tests: counts requests instead of restarting.
#[derive(Debug, Default)]
pub struct MockReloader {
    requests: AtomicUsize,
}

impl MockReloader {
    pub fn times_requested(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl HostReloader for MockReloader {
    fn request_reload(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }
}
