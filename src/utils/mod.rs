// Fri Aug 28 2026 - Alex

pub mod logging;

pub use logging::LoggingUtils;
