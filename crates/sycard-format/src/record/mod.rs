//! Fixed-layout card records.
//!
//! Each record is a view over exactly `SIZE` bytes of the (word-swapped)
//! image. Field accessors decode a documented byte range; bytes that are not
//! understood stay in the slice untouched and are reachable via `raw()`.
//!
//! | Record | Size | Decoded fields |
//! |---|---|---|
//! | [`FileHeader`] | 32 | card id @ 8, wave count @ 13, name @ 14..24 |
//! | [`WaveAddress`] | 4 | word address @ 1..4 |
//! | [`WaveHeader`] | 1482 | sample count @ 1, name @ 2..10 |
//! | [`SampleHeader`] | 110 | volume, loop mode, key, pitch @ 0..4, addresses @ 14..28 |

mod file_header;
mod sample_header;
mod wave;

pub use file_header::*;
pub use sample_header::*;
pub use wave::*;
