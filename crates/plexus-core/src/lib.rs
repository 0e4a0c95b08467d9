//! plexus-core: shared foundation for the Plexus graph viewer.
//!
//! This crate provides the cross-cutting pieces used by the engine crate:
//! - Errors: per-subsystem enums with stable boundary codes
//! - Types: identifier newtypes and performance collection aliases
//! - Config: TOML viewer configuration
//! - Events: handler trait with no-op defaults plus a synchronous dispatcher
//! - Tracing: logging setup
//! - Constants: palette, layout dimensions, message timing

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::{LayoutConfig, MessageConfig, ViewerConfig};
pub use errors::{ConfigError, IngestError, LayoutError, PlexusErrorCode, ViewerError};
pub use events::{EventDispatcher, ViewerEventHandler};
pub use types::EdgeId;
