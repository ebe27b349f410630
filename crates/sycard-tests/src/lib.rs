//! Sycard End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the card decoding and unpack
//! flows:
//!
//! - Decoding: synthetic card image -> card model
//! - Unpacking: card image -> `data.yaml` + WAV files
//! - Robustness: malformed images fail with the right error kind
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sycard-tests
//! ```

pub mod fixtures;

pub use fixtures::{CardFileFixture, CardFixture, SampleFixture, WaveFixture};
