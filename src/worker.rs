// Fri Aug 28 2026 - Alex

use log::{error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::keys::{mask_key, Candidate, KeypairProvider};
use crate::lookup::BalanceClient;
use crate::sink::{FoundKeySink, FoundRecord};
use crate::stats::ProbeStats;

pub const DEFAULT_SUMMARY_INTERVAL: u64 = 100;

/// One probe loop: generate a candidate, derive its address, look up
/// the balance, count it, persist on a hit. Lookup failures degrade to
/// a zero balance; the loop only stops when the run flag clears.
pub struct Worker {
    id: usize,
    provider: Arc<dyn KeypairProvider>,
    client: Arc<BalanceClient>,
    stats: Arc<ProbeStats>,
    sink: Arc<FoundKeySink>,
    running: Arc<AtomicBool>,
    summary_interval: u64,
}

impl Worker {
    pub fn new(
        id: usize,
        provider: Arc<dyn KeypairProvider>,
        client: Arc<BalanceClient>,
        stats: Arc<ProbeStats>,
        sink: Arc<FoundKeySink>,
        running: Arc<AtomicBool>,
    ) -> Self {
        Self {
            id,
            provider,
            client,
            stats,
            sink,
            running,
            summary_interval: DEFAULT_SUMMARY_INTERVAL,
        }
    }

    pub fn with_summary_interval(mut self, interval: u64) -> Self {
        self.summary_interval = interval.max(1);
        self
    }

    pub fn run(&self) {
        while self.running.load(Ordering::SeqCst) {
            self.probe_once();
        }
    }

    /// A single iteration, split out so tests can drive the loop body
    /// without threads.
    pub fn probe_once(&self) {
        let (private_key, public_key) = self.provider.generate_keypair();
        let Some(address) = self.provider.derive_address(&public_key) else {
            warn!("worker {}: generated public key did not decode, skipping", self.id);
            return;
        };

        let result = self.client.lookup(&address);
        let candidate = Candidate {
            private_key,
            public_key,
            address,
        };

        let checked = self.stats.record_checked();

        let _console = self.stats.console();
        info!(
            "[CHECK] #{} | Key: {} | Addr: {}... | Balance: {:.8}",
            checked,
            mask_key(&candidate.private_key),
            prefix(&candidate.address),
            result.balance_btc()
        );

        if result.balance_sats > 0 {
            self.stats.record_found();
            let record = FoundRecord::new(candidate, result.balance_sats);
            match self.sink.append(&record) {
                Ok(path) => info!(
                    "[FOUND] {} -> {:.8} BTC (saved to {})",
                    record.address,
                    record.balance_btc(),
                    path.display()
                ),
                Err(err) => error!(
                    "worker {}: failed to persist found key for {}: {}",
                    self.id, record.address, err
                ),
            }
        }

        if checked % self.summary_interval == 0 {
            info!(
                "[INFO] Total Checked: {}, Found: {}",
                checked,
                self.stats.found()
            );
        }
    }
}

fn prefix(address: &str) -> &str {
    &address[..address.len().min(6)]
}
