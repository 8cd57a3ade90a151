// Fri Aug 28 2026 - Alex

pub mod banner;

pub use banner::Banner;
