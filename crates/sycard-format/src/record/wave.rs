//! Wave address table entries and wave headers.

use crate::address::WordAddress;
use crate::cursor::Record;
use crate::decode::decode_name;

/// Size of a wave address entry in bytes.
pub const WAVE_ADDRESS_SIZE: usize = 4;

/// Size of a wave header in bytes.
pub const WAVE_HEADER_SIZE: usize = 1482;

/// Width of the wave name field.
pub const WAVE_NAME_LEN: usize = 8;

/// One entry of the wave address table: a reserved byte and a word address.
#[derive(Debug, Clone, Copy)]
pub struct WaveAddress<'a> {
    raw: &'a [u8],
}

impl<'a> WaveAddress<'a> {
    /// Word address of the wave header.
    pub fn address(&self) -> WordAddress {
        WordAddress::from_slice(&self.raw[1..4])
    }

    /// Byte offset of the wave header.
    pub fn byte_offset(&self) -> usize {
        self.address().byte_offset() as usize
    }
}

impl<'a> Record<'a> for WaveAddress<'a> {
    const SIZE: usize = WAVE_ADDRESS_SIZE;
    const NAME: &'static str = "wave address";

    fn from_bytes(raw: &'a [u8]) -> Self {
        Self { raw }
    }
}

/// A wave header. `num_samples` sample headers follow it back to back.
///
/// Layout: reserved byte, sample count, 8-byte name, then 174 + 18 + 1280
/// reserved bytes.
#[derive(Debug, Clone, Copy)]
pub struct WaveHeader<'a> {
    raw: &'a [u8],
}

impl<'a> WaveHeader<'a> {
    /// Number of sample headers following this header.
    pub fn num_samples(&self) -> u8 {
        self.raw[1]
    }

    /// The padded name field as stored.
    pub fn name_bytes(&self) -> &'a [u8] {
        &self.raw[2..2 + WAVE_NAME_LEN]
    }

    /// The wave name with trailing padding removed.
    pub fn name(&self) -> String {
        decode_name(self.name_bytes())
    }

    /// All bytes of the record, including reserved regions.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }
}

impl<'a> Record<'a> for WaveHeader<'a> {
    const SIZE: usize = WAVE_HEADER_SIZE;
    const NAME: &'static str = "wave header";

    fn from_bytes(raw: &'a [u8]) -> Self {
        Self { raw }
    }
}
