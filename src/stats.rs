// Thu Aug 27 2026 - Alex

use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide probe counters plus the console lock that keeps
/// per-check status lines from interleaving. The critical section is
/// short next to network latency, so one lock is plenty.
pub struct ProbeStats {
    checked: AtomicU64,
    found: AtomicU64,
    console: Mutex<()>,
}

impl ProbeStats {
    pub fn new() -> Self {
        Self {
            checked: AtomicU64::new(0),
            found: AtomicU64::new(0),
            console: Mutex::new(()),
        }
    }

    /// Increments the global checked counter and returns the new total.
    pub fn record_checked(&self) -> u64 {
        self.checked.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Increments the global found counter and returns the new total.
    pub fn record_found(&self) -> u64 {
        self.found.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn checked(&self) -> u64 {
        self.checked.load(Ordering::SeqCst)
    }

    pub fn found(&self) -> u64 {
        self.found.load(Ordering::SeqCst)
    }

    pub fn console(&self) -> MutexGuard<'_, ()> {
        self.console.lock()
    }
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = ProbeStats::new();
        assert_eq!(stats.checked(), 0);
        assert_eq!(stats.found(), 0);
    }

    #[test]
    fn test_record_returns_new_total() {
        let stats = ProbeStats::new();
        assert_eq!(stats.record_checked(), 1);
        assert_eq!(stats.record_checked(), 2);
        assert_eq!(stats.record_found(), 1);
    }

    #[test]
    fn test_no_lost_updates_under_contention() {
        const WORKERS: usize = 8;
        const INCREMENTS: u64 = 10_000;

        let stats = Arc::new(ProbeStats::new());
        let mut handles = Vec::with_capacity(WORKERS);

        for _ in 0..WORKERS {
            let stats = stats.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..INCREMENTS {
                    stats.record_checked();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.checked(), WORKERS as u64 * INCREMENTS);
    }
}
