//! Sample headers.

use crate::address::WordAddress;
use crate::cursor::Record;
use crate::decode::{decode_volume, LoopMode};

/// Size of a sample header in bytes.
pub const SAMPLE_HEADER_SIZE: usize = 110;

const VOLUME: usize = 0;
const LOOP_MODE: usize = 1;
const ORIG_KEY: usize = 2;
const PITCH: usize = 3;
const SAMPLE_BEGIN: usize = 14;
const LOOP_BEGIN: usize = 17;
const SAMPLE_NO: usize = 20;
const LOOP_END: usize = 21;
const SAMPLE_END: usize = 25;

/// A sample header.
///
/// Layout (byte offsets):
///
/// | Offset | Size | Field |
/// |---|---|---|
/// | 0 | 1 | volume, stored as `127 - volume` |
/// | 1 | 1 | loop mode code |
/// | 2 | 1 | original key |
/// | 3 | 1 | pitch (signed) |
/// | 4 | 10 | reserved |
/// | 14 | 3 | sample begin (word address) |
/// | 17 | 3 | loop begin (word address) |
/// | 20 | 1 | sample number |
/// | 21 | 3 | loop end (word address) |
/// | 24 | 1 | reserved |
/// | 25 | 3 | sample end (word address) |
/// | 28 | 82 | reserved |
#[derive(Debug, Clone, Copy)]
pub struct SampleHeader<'a> {
    raw: &'a [u8],
}

impl<'a> SampleHeader<'a> {
    /// Stored (inverted) volume byte.
    pub fn raw_volume(&self) -> u8 {
        self.raw[VOLUME]
    }

    /// Volume in `0..=127`.
    pub fn volume(&self) -> u8 {
        decode_volume(self.raw_volume())
    }

    /// Raw loop mode code.
    pub fn loop_mode_code(&self) -> u8 {
        self.raw[LOOP_MODE]
    }

    /// Loop mode, with unknown codes mapped to [`LoopMode::Unknown`].
    pub fn loop_mode(&self) -> LoopMode {
        LoopMode::from_code(self.loop_mode_code())
    }

    /// Original key byte.
    pub fn orig_key(&self) -> u8 {
        self.raw[ORIG_KEY]
    }

    /// Pitch offset.
    pub fn pitch(&self) -> i8 {
        self.raw[PITCH] as i8
    }

    /// Sample number byte.
    pub fn sample_no(&self) -> u8 {
        self.raw[SAMPLE_NO]
    }

    /// First word of the sample data.
    pub fn sample_begin(&self) -> WordAddress {
        WordAddress::from_slice(&self.raw[SAMPLE_BEGIN..])
    }

    /// Loop start.
    pub fn loop_begin(&self) -> WordAddress {
        WordAddress::from_slice(&self.raw[LOOP_BEGIN..])
    }

    /// Loop end.
    pub fn loop_end(&self) -> WordAddress {
        WordAddress::from_slice(&self.raw[LOOP_END..])
    }

    /// One past the last word of the sample data.
    pub fn sample_end(&self) -> WordAddress {
        WordAddress::from_slice(&self.raw[SAMPLE_END..])
    }

    /// All bytes of the record, including reserved regions.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }
}

impl<'a> Record<'a> for SampleHeader<'a> {
    const SIZE: usize = SAMPLE_HEADER_SIZE;
    const NAME: &'static str = "sample header";

    fn from_bytes(raw: &'a [u8]) -> Self {
        Self { raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes() -> Vec<u8> {
        let mut raw = vec![0u8; SAMPLE_HEADER_SIZE];
        raw[0] = 27;
        raw[1] = 2;
        raw[2] = 200;
        raw[3] = (-5i8) as u8;
        raw[14..17].copy_from_slice(&[0x00, 0x01, 0x00]);
        raw[17..20].copy_from_slice(&[0x00, 0x01, 0x10]);
        raw[20] = 7;
        raw[21..24].copy_from_slice(&[0x00, 0x01, 0x20]);
        raw[24] = 0xAA;
        raw[25..28].copy_from_slice(&[0x00, 0x01, 0x40]);
        raw
    }

    #[test]
    fn test_scalar_fields() {
        let raw = header_bytes();
        let header = SampleHeader::from_bytes(&raw);

        assert_eq!(header.raw_volume(), 27);
        assert_eq!(header.volume(), 100);
        assert_eq!(header.loop_mode_code(), 2);
        assert_eq!(header.loop_mode(), LoopMode::LoopForward);
        assert_eq!(header.orig_key(), 200);
        assert_eq!(header.pitch(), -5);
        assert_eq!(header.sample_no(), 7);
    }

    #[test]
    fn test_addresses() {
        let raw = header_bytes();
        let header = SampleHeader::from_bytes(&raw);

        assert_eq!(header.sample_begin().byte_offset(), 0x200);
        assert_eq!(header.loop_begin().byte_offset(), 0x220);
        assert_eq!(header.loop_end().byte_offset(), 0x240);
        assert_eq!(header.sample_end().byte_offset(), 0x280);
    }

    #[test]
    fn test_unknown_loop_mode_falls_back() {
        let mut raw = header_bytes();
        raw[1] = 9;
        let header = SampleHeader::from_bytes(&raw);
        assert_eq!(header.loop_mode_code(), 9);
        assert_eq!(header.loop_mode(), LoopMode::Unknown);
    }
}
