//! Public runtime configuration for the data portal.
//!
//! The hosting environment supplies a flat string mapping ([`RawConfig`]); the
//! resolver overlays it on fixed defaults and always returns a complete
//! [`PortalConfig`]. Resolution is pure and never fails. Only loading a source
//! (a file, the environment) can produce a [`ConfigError`].

pub mod defaults;
pub mod error;
pub mod keys;
pub mod raw;
pub mod resolve;

pub use error::{ConfigError, Result};
pub use raw::RawConfig;
pub use resolve::{resolve, PortalConfig};
