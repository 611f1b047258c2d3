//! Live adapters for real external interactions.

pub mod provider;

pub use provider::LiveToolProvider;
