//! Test fixture utilities for building synthetic card images.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sycard_format::record::{
    CARD_NAME_LEN, FILE_HEADER_SIZE, SAMPLE_HEADER_SIZE, WAVE_ADDRESS_SIZE, WAVE_HEADER_SIZE,
    WAVE_NAME_LEN,
};
use sycard_format::{encode_name, encode_volume, swap_word_endianness, WordAddress};

/// Bytes appended after the sample data.
pub const TAIL_PADDING: usize = 2;

/// A sample to place on a synthetic card.
#[derive(Debug, Clone)]
pub struct SampleFixture {
    /// Volume as decoded (0-127).
    pub volume: u8,
    /// Loop mode code.
    pub loop_mode: u8,
    /// Original key byte.
    pub key: u8,
    /// Pitch offset.
    pub pitch: i8,
    /// Sample number byte.
    pub sample_no: u8,
    /// PCM data.
    pub data: Vec<i16>,
}

impl SampleFixture {
    /// A looping sample at key C4 with the given data.
    pub fn new(data: Vec<i16>) -> Self {
        Self {
            volume: 100,
            loop_mode: 2,
            key: 200,
            pitch: 0,
            sample_no: 0,
            data,
        }
    }
}

/// A wave to place on a synthetic card.
#[derive(Debug, Clone)]
pub struct WaveFixture {
    /// Wave name (at most 8 bytes).
    pub name: String,
    /// Samples of the wave.
    pub samples: Vec<SampleFixture>,
}

impl WaveFixture {
    /// Create a wave with the given name and samples.
    pub fn new(name: &str, samples: Vec<SampleFixture>) -> Self {
        Self {
            name: name.to_string(),
            samples,
        }
    }
}

/// Builder for a synthetic card image.
///
/// The image is laid out as: file header, wave address table, every wave
/// header followed by its sample headers, then all sample data and one
/// padding word, since a sample range may not reach the last byte.
#[derive(Debug, Clone)]
pub struct CardFixture {
    /// Card name (at most 10 bytes).
    pub name: String,
    /// Card id.
    pub id: u16,
    /// Waves on the card.
    pub waves: Vec<WaveFixture>,
}

impl CardFixture {
    /// Create an empty card.
    pub fn new(name: &str, id: u16) -> Self {
        Self {
            name: name.to_string(),
            id,
            waves: Vec::new(),
        }
    }

    /// Add a wave.
    pub fn with_wave(mut self, wave: WaveFixture) -> Self {
        self.waves.push(wave);
        self
    }

    /// Byte offset of the first sample header of wave `index`.
    pub fn sample_header_offset(&self, wave_index: usize) -> usize {
        self.wave_offset(wave_index) + WAVE_HEADER_SIZE
    }

    /// Byte offset of the header of wave `index`.
    pub fn wave_offset(&self, wave_index: usize) -> usize {
        let table_end = FILE_HEADER_SIZE + WAVE_ADDRESS_SIZE * self.waves.len();
        table_end
            + self.waves[..wave_index]
                .iter()
                .map(|w| WAVE_HEADER_SIZE + SAMPLE_HEADER_SIZE * w.samples.len())
                .sum::<usize>()
    }

    /// The image in host word order, as the decoder sees it after loading.
    pub fn to_host_image(&self) -> Vec<u8> {
        let data_start = self.wave_offset(self.waves.len());
        let data_len: usize = self
            .waves
            .iter()
            .flat_map(|w| w.samples.iter())
            .map(|s| s.data.len() * 2)
            .sum();

        let mut image = vec![0u8; data_start + data_len + TAIL_PADDING];
        image[0x08..0x0A].copy_from_slice(&self.id.to_le_bytes());
        image[0x0D] = self.waves.len() as u8;
        image[0x0E..0x0E + CARD_NAME_LEN].copy_from_slice(
            &encode_name::<CARD_NAME_LEN>(&self.name).expect("card name too long"),
        );

        let mut data_pos = data_start;
        for (i, wave) in self.waves.iter().enumerate() {
            let wave_pos = self.wave_offset(i);
            let entry = FILE_HEADER_SIZE + i * WAVE_ADDRESS_SIZE;
            put_address(&mut image, entry + 1, wave_pos);

            image[wave_pos + 1] = wave.samples.len() as u8;
            image[wave_pos + 2..wave_pos + 2 + WAVE_NAME_LEN].copy_from_slice(
                &encode_name::<WAVE_NAME_LEN>(&wave.name).expect("wave name too long"),
            );

            for (j, sample) in wave.samples.iter().enumerate() {
                let h = wave_pos + WAVE_HEADER_SIZE + j * SAMPLE_HEADER_SIZE;
                let end = data_pos + sample.data.len() * 2;

                image[h] = encode_volume(sample.volume);
                image[h + 1] = sample.loop_mode;
                image[h + 2] = sample.key;
                image[h + 3] = sample.pitch as u8;
                put_address(&mut image, h + 14, data_pos);
                put_address(&mut image, h + 17, data_pos);
                image[h + 20] = sample.sample_no;
                put_address(&mut image, h + 21, end);
                put_address(&mut image, h + 25, end);

                for (k, value) in sample.data.iter().enumerate() {
                    let at = data_pos + k * 2;
                    image[at..at + 2].copy_from_slice(&value.to_be_bytes());
                }
                data_pos = end;
            }
        }

        image
    }

    /// The image as stored on the card (before the load-time word swap).
    pub fn to_card_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_host_image();
        swap_word_endianness(&mut bytes);
        bytes
    }
}

/// Writes the word address of `byte_offset` at `at`.
pub fn put_address(image: &mut [u8], at: usize, byte_offset: usize) {
    let addr = WordAddress::from_word_index((byte_offset / 2) as u32);
    image[at..at + 3].copy_from_slice(&addr.0);
}

/// A card file in a temporary directory.
pub struct CardFileFixture {
    pub root: TempDir,
    pub card_path: PathBuf,
}

impl CardFileFixture {
    /// Write raw card bytes to `card.img` in a fresh temporary directory.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let card_path = root.path().join("card.img");
        fs::write(&card_path, bytes).expect("Failed to write card file");
        Self { root, card_path }
    }

    /// Write the on-card bytes of `card`.
    pub fn new(card: &CardFixture) -> Self {
        Self::from_bytes(&card.to_card_bytes())
    }

    /// The temporary directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// The card file path as a string.
    pub fn card_file(&self) -> &str {
        self.card_path.to_str().expect("temp path is not UTF-8")
    }
}
