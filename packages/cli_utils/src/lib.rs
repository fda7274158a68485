#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared CLI utilities for the offense reference.
//!
//! Provides [`init_logger`], which configures `pretty_env_logger` from
//! `RUST_LOG`, and the [`render`] module, which turns catalog entries and
//! resolved sentences into plain-text blocks for the terminal.

pub mod render;

/// Initializes the global `pretty_env_logger` logger from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored (e.g., in tests).
pub fn init_logger() {
    let logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}
