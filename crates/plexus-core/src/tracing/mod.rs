//! Tracing setup for Plexus.

mod setup;

pub use setup::init_tracing;
