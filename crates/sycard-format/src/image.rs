//! Card image loading.
//!
//! The sampler stores 16-bit words with the opposite byte order to the
//! host, so every complete byte pair of the image is swapped once, right
//! after loading and before any record is decoded.

use std::fs;
use std::path::Path;

use crate::error::{CardError, CardResult};

/// An in-memory card image with the word-swap already applied.
///
/// The image is read-only once constructed; all decoding borrows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    bytes: Vec<u8>,
}

impl CardImage {
    /// Reads a card file and applies the word-swap.
    ///
    /// Any file length is accepted; a trailing odd byte is kept unswapped.
    ///
    /// # Errors
    /// Returns [`CardError::Io`] if the file cannot be opened or read.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| CardError::io(path, e))?;
        Ok(Self::from_raw(bytes))
    }

    /// Builds an image from raw card bytes (as stored on the card) and
    /// applies the word-swap.
    pub fn from_raw(mut bytes: Vec<u8>) -> Self {
        swap_word_endianness(&mut bytes);
        Self { bytes }
    }

    /// Wraps bytes that are already in host word order.
    pub fn from_swapped(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The swapped image bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Image length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the image holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for CardImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Swaps the two bytes of every complete 16-bit word in place.
///
/// A trailing odd byte is left where it is.
pub fn swap_word_endianness(bytes: &mut [u8]) {
    for word in bytes.chunks_exact_mut(2) {
        word.swap(0, 1);
    }
}
