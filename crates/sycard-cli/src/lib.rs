//! Sycard CLI library.
//!
//! This crate provides the pieces around the card decoder: the metadata
//! document, the WAV writer and the command implementations.

pub mod audio;
pub mod commands;
pub mod metadata;
