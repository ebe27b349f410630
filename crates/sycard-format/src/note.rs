//! Note naming for the sampler's original-key field.
//!
//! The key byte is anchored so that 146 wraps to zero, and the pitch-class
//! table starts at F#. This is the sampler's own convention and does not
//! line up with MIDI numbering.

/// Pitch classes, starting at the anchor key.
pub const PITCH_CLASSES: [&str; 12] = [
    "F#", "G", "G#", "A", "A#", "B", "C", "C#", "D", "D#", "E", "F",
];

/// Key value that maps to position zero.
pub const KEY_ANCHOR: i32 = 146;

/// A decoded key: pitch class plus octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteName {
    /// Index into [`PITCH_CLASSES`].
    pub pitch_class: usize,
    /// Octave number.
    pub octave: i32,
}

impl NoteName {
    /// Decodes a raw key byte.
    pub fn from_key(key: u8) -> Self {
        let mut adjusted = i32::from(key) - KEY_ANCHOR;
        if adjusted < 0 {
            adjusted += KEY_ANCHOR;
        }

        Self {
            pitch_class: (adjusted % 12) as usize,
            // Truncating division, as the hardware tables do.
            octave: (adjusted - 6) / 12,
        }
    }

    /// The pitch-class name, e.g. `"C#"`.
    pub fn pitch_class_name(&self) -> &'static str {
        PITCH_CLASSES[self.pitch_class]
    }
}

impl std::fmt::Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch_class_name(), self.octave)
    }
}

/// Converts a raw key byte into a note string such as `"C4"`.
///
/// # Examples
/// ```
/// use sycard_format::note::key_to_note_name;
///
/// assert_eq!(key_to_note_name(146), "F#0");
/// assert_eq!(key_to_note_name(200), "C4");
/// ```
pub fn key_to_note_name(key: u8) -> String {
    NoteName::from_key(key).to_string()
}
