#![no_main]

use libfuzzer_sys::fuzz_target;
use sycard_format::{assemble, CardImage};

fuzz_target!(|data: &[u8]| {
    let image = CardImage::from_raw(data.to_vec());
    let _ = assemble(image.as_bytes());
});
