//! Word addresses.
//!
//! The card addresses everything in 16-bit words. An address is stored as
//! three bytes, most significant first, counting words from the start of
//! the image.

use byteorder::{BigEndian, ByteOrder};

/// Size of a stored word address in bytes.
pub const WORD_ADDRESS_SIZE: usize = 3;

/// A 3-byte big-endian word index into the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WordAddress(pub [u8; WORD_ADDRESS_SIZE]);

impl WordAddress {
    /// Reads an address from the first three bytes of `raw`.
    ///
    /// # Panics
    /// Panics if `raw` is shorter than three bytes. Record views only call
    /// this on slices whose length the cursor has already checked.
    pub fn from_slice(raw: &[u8]) -> Self {
        Self([raw[0], raw[1], raw[2]])
    }

    /// Builds the address of the given word index (upper bits beyond 24 are dropped).
    pub fn from_word_index(index: u32) -> Self {
        let mut raw = [0u8; WORD_ADDRESS_SIZE];
        BigEndian::write_u24(&mut raw, index & 0x00FF_FFFF);
        Self(raw)
    }

    /// The word index held by the address.
    pub fn word_index(self) -> u32 {
        BigEndian::read_u24(&self.0)
    }

    /// The byte offset the address points at.
    pub fn byte_offset(self) -> u32 {
        resolve(self)
    }
}

/// Converts a word address to a byte offset (`2 * word index`).
///
/// The largest 24-bit index doubled still fits in a `u32`.
pub fn resolve(addr: WordAddress) -> u32 {
    2 * addr.word_index()
}
