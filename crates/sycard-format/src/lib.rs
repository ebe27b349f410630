//! Sycard Format - Wave Card Image Decoder
//!
//! This crate decodes the binary "wave card" images a hardware sampler uses
//! to store its sound banks into an owned tree of waves and samples with
//! their 16-bit PCM data.
//!
//! # Image Layout
//!
//! Everything on the card is addressed in 16-bit words. A card image holds:
//!
//! - a 32-byte [`record::FileHeader`] at offset 0,
//! - `num_waves` 4-byte [`record::WaveAddress`] entries right after it,
//! - for each wave, a 1482-byte [`record::WaveHeader`] at the addressed
//!   location, followed by `num_samples` 110-byte [`record::SampleHeader`]s,
//! - the PCM data, delimited by word addresses in the sample headers.
//!
//! The sampler's words have the opposite byte order to the host, so the
//! image is word-swapped once when it is loaded.
//!
//! # Example
//!
//! ```no_run
//! use sycard_format::load_card;
//!
//! let card = load_card("bank.card")?;
//! for wave in &card.waves {
//!     println!("{}: {} samples", wave.name, wave.samples.len());
//! }
//! # Ok::<(), sycard_format::CardError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`image`]: loading and the word-swap
//! - [`address`]: 3-byte word addresses
//! - [`cursor`]: bounds-checked record reads
//! - [`record`]: fixed-layout record views
//! - [`decode`], [`note`]: field decoders
//! - [`extract`]: PCM extraction
//! - [`assemble`]: the file → wave → sample walk

pub mod address;
pub mod assemble;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod extract;
pub mod image;
pub mod model;
pub mod note;
pub mod record;

// Re-export main types
pub use address::{resolve, WordAddress};
pub use assemble::{assemble, load_card};
pub use cursor::{next_record, Record, StructCursor};
pub use decode::{decode_name, decode_volume, encode_name, encode_volume, LoopMode};
pub use error::{CardError, CardResult};
pub use extract::{extract_range, extract_samples};
pub use image::{swap_word_endianness, CardImage};
pub use model::{Card, Sample, Wave};
pub use note::{key_to_note_name, NoteName};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sample rate of the sampler's PCM data in Hz.
pub const SAMPLE_RATE: u32 = 32000;

/// Number of audio channels per sample.
pub const CHANNELS: u16 = 1;
