//! Shared types for `sockprobe`.
//!
//! * [`network`]: endpoint value types and their parsing.
//! * [`error`]: usage errors raised before any socket is touched.
//! * [`config`]: runtime configuration handed to commands.

pub mod config;
pub mod error;
pub mod network;

mod macros;

#[doc(hidden)]
pub use tracing as __tracing;
