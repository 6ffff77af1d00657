//! End-to-end checks of the prober against real listeners.

pub mod util;

#[cfg(test)]
mod probing;
