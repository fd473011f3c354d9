//! Logging setup for the storefront.
//!
//! Library crates emit events through `tracing` macros and never install a
//! subscriber. Binaries call [`init`] once at startup with a
//! [`LoggingConfig`].

mod error;
mod logging;

pub use error::ObservabilityError;
pub use logging::*;
