// Sat Aug 29 2026 - Alex

pub mod config;
pub mod keys;
pub mod lookup;
pub mod sink;
pub mod stats;
pub mod supervisor;
pub mod ui;
pub mod utils;
pub mod worker;

pub use config::Config;
pub use keys::{KeypairProvider, SecpKeypairProvider};
pub use lookup::{BalanceClient, EndpointRegistry, LookupResult};
pub use sink::{FoundKeySink, FoundRecord};
pub use stats::ProbeStats;
pub use supervisor::{ProbeSummary, Supervisor};
pub use worker::Worker;
