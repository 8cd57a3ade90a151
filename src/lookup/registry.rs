// Thu Aug 27 2026 - Alex

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// One configured balance-lookup endpoint. The template carries an
/// `{address}` placeholder substituted verbatim per lookup.
pub struct Endpoint {
    template: String,
    cooldown_until_ms: AtomicU64,
}

impl Endpoint {
    fn new(template: String) -> Self {
        Self {
            template,
            cooldown_until_ms: AtomicU64::new(0),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn url_for(&self, address: &str) -> String {
        self.template.replace("{address}", address)
    }
}

/// Ordered endpoint list shared across all workers. Cooldown deadlines
/// are stored as millisecond offsets from the registry's epoch and
/// advanced with `fetch_max`, so a deadline only ever moves forward.
pub struct EndpointRegistry {
    epoch: Instant,
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    pub fn new(templates: Vec<String>) -> Self {
        Self {
            epoch: Instant::now(),
            endpoints: templates.into_iter().map(Endpoint::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn endpoint(&self, index: usize) -> &Endpoint {
        &self.endpoints[index]
    }

    pub fn is_available(&self, index: usize, now: Instant) -> bool {
        let deadline = self.endpoints[index].cooldown_until_ms.load(Ordering::Acquire);
        self.offset_ms(now) >= deadline
    }

    pub fn mark_cooldown(&self, index: usize, now: Instant, cooldown: Duration) {
        let deadline = self.offset_ms(now).saturating_add(cooldown.as_millis() as u64);
        self.endpoints[index]
            .cooldown_until_ms
            .fetch_max(deadline, Ordering::AcqRel);
    }

    pub fn cooldown_remaining(&self, index: usize, now: Instant) -> Option<Duration> {
        let deadline = self.endpoints[index].cooldown_until_ms.load(Ordering::Acquire);
        let now_ms = self.offset_ms(now);
        if now_ms >= deadline {
            None
        } else {
            Some(Duration::from_millis(deadline - now_ms))
        }
    }

    fn offset_ms(&self, t: Instant) -> u64 {
        t.saturating_duration_since(self.epoch).as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EndpointRegistry {
        EndpointRegistry::new(vec![
            "http://one/api/{address}".to_string(),
            "http://two/api/{address}".to_string(),
        ])
    }

    #[test]
    fn test_url_substitution() {
        let reg = registry();
        assert_eq!(
            reg.endpoint(0).url_for("1BoatSLRHtKNngkdXEeobR76b53LETtpyT"),
            "http://one/api/1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
        );
    }

    #[test]
    fn test_endpoints_start_available() {
        let reg = registry();
        let now = Instant::now();
        assert!(reg.is_available(0, now));
        assert!(reg.is_available(1, now));
    }

    #[test]
    fn test_cooldown_expires_with_time() {
        let reg = registry();
        let now = Instant::now();
        reg.mark_cooldown(0, now, Duration::from_secs(60));

        assert!(!reg.is_available(0, now));
        assert!(!reg.is_available(0, now + Duration::from_secs(59)));
        assert!(reg.is_available(0, now + Duration::from_secs(61)));
        assert!(reg.is_available(1, now));
    }

    #[test]
    fn test_cooldown_only_advances_forward() {
        let reg = registry();
        let now = Instant::now();
        reg.mark_cooldown(0, now, Duration::from_secs(60));
        reg.mark_cooldown(0, now, Duration::from_secs(5));

        // The shorter mark must not pull the deadline back.
        assert!(!reg.is_available(0, now + Duration::from_secs(30)));
    }

    #[test]
    fn test_cooldown_remaining() {
        let reg = registry();
        let now = Instant::now();
        assert!(reg.cooldown_remaining(0, now).is_none());

        reg.mark_cooldown(0, now, Duration::from_secs(60));
        let remaining = reg.cooldown_remaining(0, now).unwrap();
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(59));
    }
}
