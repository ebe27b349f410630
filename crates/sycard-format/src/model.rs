//! Decoded card model.
//!
//! A [`Card`] owns its waves in on-card order, each [`Wave`] owns its
//! samples, and each [`Sample`] owns its PCM buffer. Nothing borrows from
//! the image once assembly has finished.

use crate::address::resolve;
use crate::decode::LoopMode;
use crate::note::key_to_note_name;
use crate::record::SampleHeader;

/// A decoded wave card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    /// Card name.
    pub name: String,
    /// Card id.
    pub id: u16,
    /// Waves in on-card order.
    pub waves: Vec<Wave>,
}

impl Card {
    /// Total number of samples across all waves.
    pub fn sample_count(&self) -> usize {
        self.waves.iter().map(|w| w.samples.len()).sum()
    }
}

/// A named group of samples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wave {
    /// Wave name (may be empty).
    pub name: String,
    /// Samples in on-card order.
    pub samples: Vec<Sample>,
}

/// One sample: playback settings plus its PCM data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sample {
    /// Volume (0-127).
    pub volume: u8,
    /// Volume byte as stored; values above 127 decode to a volume of 0.
    pub raw_volume: u8,
    /// Loop mode.
    pub loop_mode: LoopMode,
    /// Loop mode code as stored, kept for codes the table does not know.
    pub loop_mode_code: u8,
    /// Original key byte.
    pub key: u8,
    /// Pitch offset.
    pub pitch: i8,
    /// Sample number byte.
    pub sample_no: u8,
    /// Loop start as an image byte offset.
    pub loop_begin: u32,
    /// Loop end as an image byte offset.
    pub loop_end: u32,
    /// 16-bit PCM data.
    pub data: Vec<i16>,
}

impl Sample {
    /// Builds a sample from its header and already extracted data.
    pub fn from_header(header: &SampleHeader<'_>, data: Vec<i16>) -> Self {
        Self {
            volume: header.volume(),
            raw_volume: header.raw_volume(),
            loop_mode: header.loop_mode(),
            loop_mode_code: header.loop_mode_code(),
            key: header.orig_key(),
            pitch: header.pitch(),
            sample_no: header.sample_no(),
            loop_begin: resolve(header.loop_begin()),
            loop_end: resolve(header.loop_end()),
            data,
        }
    }

    /// Note name of the original key, e.g. `"C4"`.
    pub fn note_name(&self) -> String {
        key_to_note_name(self.key)
    }

    /// Number of PCM frames.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sample has no PCM data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
