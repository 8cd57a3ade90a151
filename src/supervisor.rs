// Fri Aug 28 2026 - Alex

use anyhow::Result;
use log::info;
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::Config;
use crate::keys::{KeypairProvider, SecpKeypairProvider};
use crate::lookup::{BalanceClient, EndpointRegistry, HttpTransport, ReqwestTransport};
use crate::sink::FoundKeySink;
use crate::stats::ProbeStats;
use crate::worker::Worker;

pub const DEFAULT_WORKERS: usize = 4;
const IDLE_WAKE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy)]
pub struct ProbeSummary {
    pub checked: u64,
    pub found: u64,
}

/// Spawns the worker threads, then idles until an interrupt clears the
/// run flag. Workers never complete on their own, so the supervisor
/// does not wait on them; on shutdown they are abandoned in place
/// (they also observe the run flag between iterations).
pub struct Supervisor {
    config: Config,
    threads: usize,
    provider: Arc<dyn KeypairProvider>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Supervisor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            threads: DEFAULT_WORKERS,
            provider: Arc::new(SecpKeypairProvider::new()),
            transport: None,
        }
    }

    /// Worker count; 0 means one worker per CPU.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        self
    }

    pub fn with_provider(mut self, provider: Arc<dyn KeypairProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Blocks until interrupted, then reports final totals.
    pub fn run(&self) -> Result<ProbeSummary> {
        let running = Arc::new(AtomicBool::new(true));
        let shutdown = Arc::new((Mutex::new(()), Condvar::new()));

        {
            let running = running.clone();
            let shutdown = shutdown.clone();
            ctrlc::set_handler(move || {
                running.store(false, Ordering::SeqCst);
                shutdown.1.notify_all();
            })?;
        }

        info!("Starting {} worker threads...", self.threads);
        let (stats, _handles) = self.spawn_workers(running.clone())?;

        let (lock, condvar) = &*shutdown;
        let mut guard = lock.lock();
        while running.load(Ordering::SeqCst) {
            condvar.wait_for(&mut guard, IDLE_WAKE);
        }
        drop(guard);

        let summary = ProbeSummary {
            checked: stats.checked(),
            found: stats.found(),
        };
        info!("[EXIT] Gracefully stopped.");
        info!(
            "Total Checked: {}, Found: {}",
            summary.checked, summary.found
        );
        Ok(summary)
    }

    fn spawn_workers(
        &self,
        running: Arc<AtomicBool>,
    ) -> Result<(Arc<ProbeStats>, Vec<JoinHandle<()>>)> {
        let registry = Arc::new(EndpointRegistry::new(self.config.apis.clone()));
        let transport: Arc<dyn HttpTransport> = match &self.transport {
            Some(transport) => transport.clone(),
            None => Arc::new(ReqwestTransport::new(self.config.request_timeout())?),
        };
        let client = Arc::new(
            BalanceClient::new(registry, transport)
                .with_max_retries(self.config.max_retries)
                .with_cooldown(self.config.cooldown()),
        );
        let stats = Arc::new(ProbeStats::new());
        let sink = Arc::new(FoundKeySink::new(self.config.found_keys_dir.clone()));

        let mut handles = Vec::with_capacity(self.threads);
        for id in 0..self.threads {
            let worker = Worker::new(
                id,
                self.provider.clone(),
                client.clone(),
                stats.clone(),
                sink.clone(),
                running.clone(),
            )
            .with_summary_interval(self.config.summary_interval);

            let handle = thread::Builder::new()
                .name(format!("probe-{id}"))
                .spawn(move || worker.run())?;
            handles.push(handle);
        }

        Ok((stats, handles))
    }
}
