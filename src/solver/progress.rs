//! Progress reporting for the guess scoring scan
//!
//! Scoring every allowed guess against the candidates is the slow part of a
//! turn. Observers get told how far along it is; they never influence the
//! result.

use indicatif::ProgressBar;

/// Receives coarse progress from a scoring scan
///
/// Calls arrive from rayon worker threads, hence `Sync`.
pub trait ScanObserver: Sync {
    /// A scan over `total` guesses is starting
    fn start(&self, _total: usize) {}

    /// `scored` more guesses have been scored
    fn advance(&self, _scored: usize) {}

    /// The scan is done
    fn finish(&self) {}
}

/// Silent observer
impl ScanObserver for () {}

impl ScanObserver for ProgressBar {
    fn start(&self, total: usize) {
        self.set_length(total as u64);
        self.set_position(0);
    }

    fn advance(&self, scored: usize) {
        self.inc(scored as u64);
    }

    fn finish(&self) {
        self.finish_and_clear();
    }
}
