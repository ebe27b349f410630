//! WAV output for decoded samples.

use std::path::Path;

use anyhow::{Context, Result};
use sycard_format::{CHANNELS, SAMPLE_RATE};

/// Bit depth of the written files.
pub const BITS_PER_SAMPLE: u16 = 16;

/// WAV format used for every extracted sample: mono, 32 kHz, 16-bit PCM.
pub fn sample_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes 16-bit samples to a WAV file at `path`, replacing any existing file.
pub fn write_sample(path: &Path, samples: &[i16]) -> Result<()> {
    let mut writer = hound::WavWriter::create(path, sample_spec())
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .with_context(|| format!("Failed to write samples to: {}", path.display()))?;
    }

    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {}", path.display()))?;
    Ok(())
}
