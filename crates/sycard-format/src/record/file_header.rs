//! Card file header.

use byteorder::{ByteOrder, LittleEndian};

use crate::cursor::Record;
use crate::decode::decode_name;

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 32;

/// Width of the card name field.
pub const CARD_NAME_LEN: usize = 10;

const CARD_ID_OFFSET: usize = 0x08;
const NUM_WAVES_OFFSET: usize = 0x0D;
const NAME_OFFSET: usize = 0x0E;

/// The header at the start of every card image.
///
/// Layout: 8 bytes preamble, card id (u16), 3 reserved bytes, wave count,
/// 10-byte name, 8 reserved bytes. `num_waves` wave addresses follow the
/// header directly.
#[derive(Debug, Clone, Copy)]
pub struct FileHeader<'a> {
    raw: &'a [u8],
}

impl<'a> FileHeader<'a> {
    /// Card id. Read in host order from the swapped image.
    pub fn card_id(&self) -> u16 {
        LittleEndian::read_u16(&self.raw[CARD_ID_OFFSET..CARD_ID_OFFSET + 2])
    }

    /// Number of wave addresses following the header.
    pub fn num_waves(&self) -> u8 {
        self.raw[NUM_WAVES_OFFSET]
    }

    /// The padded name field as stored.
    pub fn name_bytes(&self) -> &'a [u8] {
        &self.raw[NAME_OFFSET..NAME_OFFSET + CARD_NAME_LEN]
    }

    /// The card name with trailing padding removed.
    pub fn name(&self) -> String {
        decode_name(self.name_bytes())
    }

    /// All bytes of the record, including reserved regions.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }
}

impl<'a> Record<'a> for FileHeader<'a> {
    const SIZE: usize = FILE_HEADER_SIZE;
    const NAME: &'static str = "file header";

    fn from_bytes(raw: &'a [u8]) -> Self {
        Self { raw }
    }
}
