// src/progress.rs
/// Lightweight progress reporting for the batch runs.
/// Frontends implement this to surface per-character status.
pub trait Progress {
    /// Called at the start with the number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One character enriched from its detail page.
    fn item_done(&mut self, _slug: &str) {}

    /// One character left as listed; the run goes on.
    fn item_failed(&mut self, _slug: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Routes progress through the logger. Used by the CLI.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, slug: &str) {
        self.done += 1;
        logd!("[{}/{}] {slug}", self.done, self.total);
    }

    fn item_failed(&mut self, slug: &str, reason: &str) {
        self.done += 1;
        logw!("[{}/{}] {slug}: {reason}", self.done, self.total);
    }
}
