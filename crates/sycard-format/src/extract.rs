//! Sample data extraction.

use byteorder::{BigEndian, ByteOrder};

use crate::address::resolve;
use crate::error::{CardError, CardResult};
use crate::record::SampleHeader;

/// Copies the PCM data referenced by a sample header out of the image.
///
/// The header's begin/end word addresses delimit the half-open byte range
/// `[begin, end)`. The image has already had its words swapped once at load
/// time; each extracted word is swapped again here, which yields the
/// sampler's native sample order.
///
/// # Errors
/// - [`CardError::OutOfBounds`] if either `begin` or `end` is not inside the
///   image. A range may not run up to the very last byte.
/// - [`CardError::InvalidRange`] if `begin >= end`.
pub fn extract_samples(image: &[u8], header: &SampleHeader<'_>) -> CardResult<Vec<i16>> {
    let begin = resolve(header.sample_begin()) as usize;
    let end = resolve(header.sample_end()) as usize;
    extract_range(image, begin, end)
}

/// Extracts the 16-bit samples stored in the byte range `[begin, end)`.
///
/// See [`extract_samples`] for the checks applied.
pub fn extract_range(image: &[u8], begin: usize, end: usize) -> CardResult<Vec<i16>> {
    if begin >= image.len() {
        return Err(CardError::OutOfBounds {
            offset: begin,
            len: image.len(),
        });
    }
    if end >= image.len() {
        return Err(CardError::OutOfBounds {
            offset: end,
            len: image.len(),
        });
    }
    if begin >= end {
        return Err(CardError::InvalidRange { begin, end });
    }

    let count = (end - begin) / 2;
    let mut samples = vec![0i16; count];
    // Host-order word read followed by a byte swap is a big-endian read.
    BigEndian::read_i16_into(&image[begin..begin + count * 2], &mut samples);
    Ok(samples)
}
