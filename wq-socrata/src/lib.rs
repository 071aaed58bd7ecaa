pub mod endpoint;
pub mod error;
pub mod measurement;
pub mod record;

#[cfg(feature = "api")]
pub mod client;
