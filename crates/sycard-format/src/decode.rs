//! Field decoders shared by the record views.
//!
//! All functions here are pure transforms from raw field values to the
//! values exposed in the card model. The inverse helpers exist for the
//! round-trip guarantees only; the crate never writes card images.

/// Padding byte of fixed-width text fields.
pub const FILL_CHAR: u8 = b' ';

/// Largest volume value.
pub const MAX_VOLUME: u8 = 0x7F;

/// Decodes a fixed-width text field, dropping trailing fill characters.
///
/// Leading fill characters are kept. No terminator is expected; bytes that
/// are not valid UTF-8 are replaced.
pub fn decode_name(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != FILL_CHAR)
        .map_or(0, |pos| pos + 1);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Encodes a string into a fixed-width field padded with fill characters.
///
/// Returns `None` if the string is longer than `N` bytes.
pub fn encode_name<const N: usize>(name: &str) -> Option<[u8; N]> {
    let bytes = name.as_bytes();
    if bytes.len() > N {
        return None;
    }
    let mut field = [FILL_CHAR; N];
    field[..bytes.len()].copy_from_slice(bytes);
    Some(field)
}

/// Decodes a stored volume. The card stores volume inverted (`127 - volume`).
///
/// Raw values above 127 decode to 0.
pub fn decode_volume(raw: u8) -> u8 {
    MAX_VOLUME.saturating_sub(raw)
}

/// Encodes a volume for storage, clamping it to `0..=127` first.
pub fn encode_volume(volume: u8) -> u8 {
    MAX_VOLUME - volume.min(MAX_VOLUME)
}

/// Playback loop mode of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopMode {
    /// Code 0 and every unrecognised code.
    #[default]
    Unknown,
    /// Code 1: play once, forward.
    PlayForward,
    /// Code 2: loop forward between the loop points.
    LoopForward,
}

impl LoopMode {
    /// Looks up a raw loop-mode code. Unknown codes map to [`LoopMode::Unknown`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::PlayForward,
            2 => Self::LoopForward,
            _ => Self::Unknown,
        }
    }

    /// The code the mode is stored as.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::PlayForward => 1,
            Self::LoopForward => 2,
        }
    }

    /// Name used in the metadata document.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::PlayForward => "play-forward",
            Self::LoopForward => "loop-forward",
        }
    }

    /// Whether playback loops.
    pub fn is_looping(self) -> bool {
        matches!(self, Self::LoopForward)
    }
}

impl From<u8> for LoopMode {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl std::fmt::Display for LoopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
