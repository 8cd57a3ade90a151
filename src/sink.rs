// Fri Aug 28 2026 - Alex

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::keys::Candidate;

pub const FOUND_FILE_NAME: &str = "btc_found.txt";
const SEPARATOR_WIDTH: usize = 40;

/// A persisted entry for a candidate with non-zero balance. Appended,
/// never mutated or deleted.
#[derive(Debug, Clone)]
pub struct FoundRecord {
    pub private_key: String,
    pub public_key: String,
    pub address: String,
    pub balance_sats: u64,
    pub timestamp: DateTime<Local>,
}

impl FoundRecord {
    pub fn new(candidate: Candidate, balance_sats: u64) -> Self {
        Self {
            private_key: candidate.private_key,
            public_key: candidate.public_key,
            address: candidate.address,
            balance_sats,
            timestamp: Local::now(),
        }
    }

    pub fn balance_btc(&self) -> f64 {
        self.balance_sats as f64 / 1e8
    }

    /// Monthly partition the record files under, e.g. "2026-08".
    pub fn partition(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }
}

/// Append-only sink for found keys. Each record lands in
/// `<root>/<YYYY-MM>/btc_found.txt` as one pre-rendered block written
/// with a single `write_all` under the lock, so concurrent workers
/// never interleave partial records.
pub struct FoundKeySink {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FoundKeySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn append(&self, record: &FoundRecord) -> io::Result<PathBuf> {
        let dir = self.root.join(record.partition());
        let path = dir.join(FOUND_FILE_NAME);
        let block = Self::render(record);

        let _guard = self.write_lock.lock();
        fs::create_dir_all(&dir)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(block.as_bytes())?;

        Ok(path)
    }

    fn render(record: &FoundRecord) -> String {
        format!(
            "Private Key: {}\nPublic Key: {}\nAddress: {}\nBalance: {:.8} BTC\n{}\n",
            record.private_key,
            record.public_key,
            record.address,
            record.balance_btc(),
            "=".repeat(SEPARATOR_WIDTH)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn record(balance_sats: u64) -> FoundRecord {
        FoundRecord::new(
            Candidate {
                private_key: "L1aW4aubDFB7yfras2S1mN3bqg9nwySY8nkoLmJebSLD5BWv3ENZ".to_string(),
                public_key: "02a1633cafcc01ebfb6d78e39f687a1f0995c62fc95f51ead10a02ee0be551b5dc"
                    .to_string(),
                address: "1BoatSLRHtKNngkdXEeobR76b53LETtpyT".to_string(),
            },
            balance_sats,
        )
    }

    #[test]
    fn test_append_creates_monthly_partition() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FoundKeySink::new(dir.path());
        let record = record(123_456_789);

        let path = sink.append(&record).unwrap();

        assert_eq!(
            path,
            dir.path().join(record.partition()).join(FOUND_FILE_NAME)
        );
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Private Key: L1aW4aubDFB7yfras2S1mN3bqg9nwySY8nkoLmJebSLD5BWv3ENZ"));
        assert!(contents.contains("Address: 1BoatSLRHtKNngkdXEeobR76b53LETtpyT"));
        assert!(contents.contains("Balance: 1.23456789 BTC"));
        assert!(contents.contains(&"=".repeat(40)));
    }

    #[test]
    fn test_balance_has_exactly_eight_decimals() {
        let block = FoundKeySink::render(&record(400_000_000));
        assert!(block.contains("Balance: 4.00000000 BTC"));
    }

    #[test]
    fn test_appends_never_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Arc::new(FoundKeySink::new(dir.path()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let sink = sink.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..25 {
                    sink.append(&record(1)).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let rec = record(1);
        let path = dir.path().join(rec.partition()).join(FOUND_FILE_NAME);
        let contents = fs::read_to_string(path).unwrap();

        // 200 intact five-line blocks, nothing torn.
        assert_eq!(contents.matches("Private Key: ").count(), 200);
        assert_eq!(contents.matches(&"=".repeat(40)).count(), 200);
        assert_eq!(contents.lines().count(), 200 * 5);
    }
}
