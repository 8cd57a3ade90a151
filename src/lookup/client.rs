// Thu Aug 27 2026 - Alex

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::lookup::error::LookupError;
use crate::lookup::registry::EndpointRegistry;
use crate::lookup::schema::parse_balance_sats;
use crate::lookup::transport::HttpTransport;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60);
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Outcome of one multi-endpoint lookup. `ok == false` means every
/// endpoint was in cooldown or exhausted without a parseable answer;
/// callers aggregate that as a zero balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupResult {
    pub balance_sats: u64,
    pub ok: bool,
}

impl LookupResult {
    fn hit(balance_sats: u64) -> Self {
        Self {
            balance_sats,
            ok: true,
        }
    }

    fn miss() -> Self {
        Self {
            balance_sats: 0,
            ok: false,
        }
    }

    pub fn balance_btc(&self) -> f64 {
        self.balance_sats as f64 / 1e8
    }
}

/// Walks the configured endpoints in order, retrying each with
/// exponential backoff and benching it for the cooldown window once
/// its retry budget is spent. The first schema match wins.
pub struct BalanceClient {
    registry: Arc<EndpointRegistry>,
    transport: Arc<dyn HttpTransport>,
    max_retries: u32,
    cooldown: Duration,
    backoff_base: Duration,
}

impl BalanceClient {
    pub fn new(registry: Arc<EndpointRegistry>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            registry,
            transport,
            max_retries: DEFAULT_MAX_RETRIES,
            cooldown: DEFAULT_COOLDOWN,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn lookup(&self, address: &str) -> LookupResult {
        let now = Instant::now();

        for index in 0..self.registry.len() {
            let endpoint = self.registry.endpoint(index);

            if !self.registry.is_available(index, now) {
                debug!("[COOLDOWN] Skipping {} (cooling down)", endpoint.template());
                continue;
            }

            let url = endpoint.url_for(address);

            for attempt in 0..self.max_retries {
                match self.attempt(&url) {
                    Ok(sats) => return LookupResult::hit(sats),
                    Err(err) => {
                        let last = attempt + 1 == self.max_retries;
                        if last {
                            warn!(
                                "[RETRY] {} failed (attempt {}/{}): {}",
                                url,
                                attempt + 1,
                                self.max_retries,
                                err
                            );
                        } else {
                            let wait = self.backoff_base * 2u32.saturating_pow(attempt);
                            warn!(
                                "[RETRY] {} failed (attempt {}/{}), retrying in {:.0?}: {}",
                                url,
                                attempt + 1,
                                self.max_retries,
                                wait,
                                err
                            );
                            if !wait.is_zero() {
                                thread::sleep(wait);
                            }
                        }
                    }
                }
            }

            self.registry.mark_cooldown(index, Instant::now(), self.cooldown);
            debug!(
                "[COOLDOWN] {} benched for {:.0?}",
                endpoint.template(),
                self.cooldown
            );
        }

        LookupResult::miss()
    }

    fn attempt(&self, url: &str) -> Result<u64, LookupError> {
        let response = self.transport.get(url)?;
        if response.status != 200 {
            return Err(LookupError::Status(response.status));
        }
        let value: serde_json::Value = serde_json::from_str(&response.body)?;
        parse_balance_sats(&value)
    }
}
