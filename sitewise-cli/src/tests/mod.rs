//! Unit tests for the Sitewise CLI commands and configuration layering.
#![expect(
    clippy::expect_used,
    reason = "Tests use expect for readable failures"
)]

mod config;
mod helpers;
