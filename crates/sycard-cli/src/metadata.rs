//! Metadata document written next to the extracted samples.
//!
//! Key names and nesting are fixed:
//!
//! ```yaml
//! name: CARD
//! id: 1
//! wave:
//!   - name: PIANO
//!     sample:
//!       - volume: 100
//!         orig-key: C4
//!         loop-mode: loop-forward
//!         pitch: 0
//! ```

use serde::{Deserialize, Serialize};
use sycard_format::{Card, Sample, Wave};

/// Card entry of the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDocument {
    pub name: String,
    pub id: u16,
    pub wave: Vec<WaveDocument>,
}

/// Wave entry of the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveDocument {
    pub name: String,
    pub sample: Vec<SampleDocument>,
}

/// Sample entry of the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleDocument {
    pub volume: u8,
    #[serde(rename = "orig-key")]
    pub orig_key: String,
    #[serde(rename = "loop-mode")]
    pub loop_mode: String,
    pub pitch: i8,
}

impl From<&Card> for CardDocument {
    fn from(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            id: card.id,
            wave: card.waves.iter().map(WaveDocument::from).collect(),
        }
    }
}

impl From<&Wave> for WaveDocument {
    fn from(wave: &Wave) -> Self {
        Self {
            name: wave.name.clone(),
            sample: wave.samples.iter().map(SampleDocument::from).collect(),
        }
    }
}

impl From<&Sample> for SampleDocument {
    fn from(sample: &Sample) -> Self {
        Self {
            volume: sample.volume,
            orig_key: sample.note_name(),
            loop_mode: sample.loop_mode.name().to_string(),
            pitch: sample.pitch,
        }
    }
}

impl CardDocument {
    /// Serializes the document as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sycard_format::LoopMode;

    fn test_card() -> Card {
        Card {
            name: "BANK A".to_string(),
            id: 12,
            waves: vec![Wave {
                name: "PIANO".to_string(),
                samples: vec![Sample {
                    volume: 100,
                    loop_mode: LoopMode::LoopForward,
                    loop_mode_code: 2,
                    key: 200,
                    pitch: -4,
                    data: vec![1, 2, 3],
                    ..Default::default()
                }],
            }],
        }
    }

    #[test]
    fn test_document_from_card() {
        let doc = CardDocument::from(&test_card());
        assert_eq!(
            doc,
            CardDocument {
                name: "BANK A".to_string(),
                id: 12,
                wave: vec![WaveDocument {
                    name: "PIANO".to_string(),
                    sample: vec![SampleDocument {
                        volume: 100,
                        orig_key: "C4".to_string(),
                        loop_mode: "loop-forward".to_string(),
                        pitch: -4,
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_yaml_keys_and_order() {
        let yaml = CardDocument::from(&test_card()).to_yaml().unwrap();

        let name_pos = yaml.find("name: BANK A").unwrap();
        let id_pos = yaml.find("id: 12").unwrap();
        let wave_pos = yaml.find("wave:").unwrap();
        assert!(name_pos < id_pos && id_pos < wave_pos);

        assert!(yaml.contains("sample:"));
        assert!(yaml.contains("volume: 100"));
        assert!(yaml.contains("orig-key: C4"));
        assert!(yaml.contains("loop-mode: loop-forward"));
        assert!(yaml.contains("pitch: -4"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let doc = CardDocument::from(&test_card());
        let parsed: CardDocument = serde_yaml::from_str(&doc.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_json_uses_same_keys() {
        let json = CardDocument::from(&test_card()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["wave"][0]["sample"][0]["orig-key"], "C4");
        assert_eq!(value["wave"][0]["sample"][0]["loop-mode"], "loop-forward");
    }
}
