// Thu Aug 27 2026 - Alex

pub mod client;
pub mod error;
pub mod registry;
pub mod schema;
pub mod transport;

pub use client::{BalanceClient, LookupResult};
pub use error::LookupError;
pub use registry::{Endpoint, EndpointRegistry};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
