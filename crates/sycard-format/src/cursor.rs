//! Bounds-checked record reads.
//!
//! Every structured read of the image goes through [`next_record`]. It
//! checks the offset and the remaining length before handing out a view of
//! exactly `R::SIZE` bytes, so no record decoder ever indexes past the end
//! of the image.

use crate::error::{CardError, CardResult};

/// A fixed-size record that can be viewed in place inside the image.
///
/// Implementors are thin views over a borrowed slice; decoding a field
/// reads the documented byte offset within that slice.
pub trait Record<'a>: Sized {
    /// Exact size of the record in bytes.
    const SIZE: usize;

    /// Human-readable record name used in error messages.
    const NAME: &'static str;

    /// Wraps a slice of exactly [`Self::SIZE`] bytes.
    fn from_bytes(raw: &'a [u8]) -> Self;
}

/// Reads the record at `*offset` and advances the offset past it.
///
/// # Errors
/// - [`CardError::OutOfBounds`] if `*offset` is beyond the image.
/// - [`CardError::TooSmall`] if fewer than `R::SIZE` bytes remain.
///
/// On error the offset is left untouched.
pub fn next_record<'a, R: Record<'a>>(image: &'a [u8], offset: &mut usize) -> CardResult<R> {
    let start = *offset;
    if start > image.len() {
        return Err(CardError::OutOfBounds {
            offset: start,
            len: image.len(),
        });
    }

    let available = image.len() - start;
    if available < R::SIZE {
        return Err(CardError::TooSmall {
            record: R::NAME,
            offset: start,
            needed: R::SIZE,
            available,
        });
    }

    let end = start + R::SIZE;
    *offset = end;
    Ok(R::from_bytes(&image[start..end]))
}

/// A read position over an image.
///
/// Sequential reads advance the position; [`StructCursor::seek`] jumps to an
/// absolute offset, which is how the assembler follows a wave address.
#[derive(Debug, Clone, Copy)]
pub struct StructCursor<'a> {
    image: &'a [u8],
    offset: usize,
}

impl<'a> StructCursor<'a> {
    /// Cursor at the start of `image`.
    pub fn new(image: &'a [u8]) -> Self {
        Self::at(image, 0)
    }

    /// Cursor at an absolute byte offset. The offset is validated on the next read.
    pub fn at(image: &'a [u8], offset: usize) -> Self {
        Self { image, offset }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves to an absolute byte offset.
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Bytes left after the current offset (0 if the offset is past the end).
    pub fn remaining(&self) -> usize {
        self.image.len().saturating_sub(self.offset)
    }

    /// Reads the next record and advances past it.
    pub fn next<R: Record<'a>>(&mut self) -> CardResult<R> {
        next_record(self.image, &mut self.offset)
    }
}
