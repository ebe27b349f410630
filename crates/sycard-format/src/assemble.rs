//! Card assembly: walks the image from the file header down to the samples.

use std::path::Path;

use crate::cursor::StructCursor;
use crate::error::CardResult;
use crate::extract::extract_samples;
use crate::image::CardImage;
use crate::model::{Card, Sample, Wave};
use crate::record::{FileHeader, SampleHeader, WaveAddress, WaveHeader};

/// Decodes a word-swapped card image into a [`Card`].
///
/// The file header sits at offset 0 and is followed by `num_waves` wave
/// addresses. Each address points at a wave header elsewhere in the image;
/// the wave's sample headers follow that header back to back.
///
/// # Errors
/// The first error hit at any level is returned unchanged and no partial
/// card is produced.
pub fn assemble(image: &[u8]) -> CardResult<Card> {
    let mut table = StructCursor::new(image);
    let header: FileHeader = table.next()?;

    let mut waves = Vec::with_capacity(usize::from(header.num_waves()));
    for _ in 0..header.num_waves() {
        let address: WaveAddress = table.next()?;
        waves.push(read_wave(image, address.byte_offset())?);
    }

    Ok(Card {
        name: header.name(),
        id: header.card_id(),
        waves,
    })
}

/// Reads one wave and all of its samples, starting at `offset`.
fn read_wave(image: &[u8], offset: usize) -> CardResult<Wave> {
    let mut cursor = StructCursor::at(image, offset);
    let header: WaveHeader = cursor.next()?;

    let mut samples = Vec::with_capacity(usize::from(header.num_samples()));
    for _ in 0..header.num_samples() {
        let sample_header: SampleHeader = cursor.next()?;
        let data = extract_samples(image, &sample_header)?;
        samples.push(Sample::from_header(&sample_header, data));
    }

    Ok(Wave {
        name: header.name(),
        samples,
    })
}

/// Loads a card file from disk and decodes it.
pub fn load_card(path: impl AsRef<Path>) -> CardResult<Card> {
    let image = CardImage::load(path)?;
    assemble(image.as_bytes())
}
