//! Unpack command implementation
//!
//! Decodes a card image and writes its metadata document and one WAV file
//! per sample into a card directory.

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;
use sycard_format::{load_card, Card};

use crate::audio::write_sample;
use crate::metadata::CardDocument;

/// File name of the metadata document inside the card directory.
pub const METADATA_FILE: &str = "data.yaml";

/// Suffix of the card directory created inside an existing target.
pub const CARD_DIR_SUFFIX: &str = ".wavecard";

/// Directory holding the per-wave sample directories.
pub const SAMPLES_DIR: &str = "samples";

/// Prefix used for the directories of waves without a name.
pub const UNNAMED_WAVE_PREFIX: &str = "unnamed_wave_";

/// Run the unpack command
///
/// # Arguments
/// * `card_file` - Path to the card image
/// * `target` - Target directory
/// * `quiet` - Suppress status output
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(card_file: &str, target: &str, quiet: bool) -> Result<ExitCode> {
    if !quiet {
        println!("{} {}", "Unpacking:".cyan().bold(), card_file);
    }

    // Decode everything before touching the filesystem.
    let card = load_card(card_file)?;

    if !quiet {
        println!(
            "{} {} (id {}), {} waves",
            "Card:".cyan().bold(),
            card.name,
            card.id,
            card.waves.len()
        );
    }

    let card_dir = unpack_card(&card, Path::new(target), quiet)?;

    if !quiet {
        println!(
            "{} Unpacked to: {}",
            "SUCCESS".green().bold(),
            card_dir.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes a decoded card below `target` and returns the card directory.
///
/// If `target` already exists the card goes into
/// `target/<card name>.wavecard`, otherwise `target` itself is created and
/// used.
pub fn unpack_card(card: &Card, target: &Path, quiet: bool) -> Result<PathBuf> {
    let card_dir = card_directory(card, target)?;
    fs::create_dir_all(&card_dir)
        .with_context(|| format!("Failed to create card directory: {}", card_dir.display()))?;

    let yaml = CardDocument::from(card)
        .to_yaml()
        .context("Failed to serialize card metadata")?;
    let metadata_path = card_dir.join(METADATA_FILE);
    fs::write(&metadata_path, yaml)
        .with_context(|| format!("Failed to write metadata: {}", metadata_path.display()))?;

    unpack_samples(card, &card_dir.join(SAMPLES_DIR), quiet)?;

    Ok(card_dir)
}

/// Card directory for `card` under `target`.
///
/// # Errors
/// Fails if `target` exists and the card name cannot be used as a single
/// directory name inside it.
pub fn card_directory(card: &Card, target: &Path) -> Result<PathBuf> {
    if !target.exists() {
        return Ok(target.to_path_buf());
    }

    let dir_name = format!("{}{}", card.name, CARD_DIR_SUFFIX);
    if !is_plain_file_name(&dir_name) {
        return Err(anyhow::anyhow!(
            "Card name {:?} is not a valid directory name",
            card.name
        ));
    }
    Ok(target.join(dir_name))
}

/// Whether `name` is exactly one normal path component.
///
/// Rejects empty names, `.` and `..`, path separators, NUL bytes and
/// anything `Path` would treat as a root or prefix.
pub fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains(&['/', '\\', '\0'][..]) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Directory names of the waves, in order.
///
/// Waves without a usable name are numbered among themselves: the first one
/// is `unnamed_wave_0`, the next `unnamed_wave_1`, and so on. A name that is
/// already taken gets a `_<n>` suffix so no two waves share a directory.
pub fn wave_directory_names(card: &Card) -> Vec<String> {
    let mut unnamed = 0;
    let mut used = HashSet::new();
    let mut names = Vec::with_capacity(card.waves.len());
    for wave in &card.waves {
        let base = if is_plain_file_name(&wave.name) {
            wave.name.clone()
        } else {
            let name = format!("{}{}", UNNAMED_WAVE_PREFIX, unnamed);
            unnamed += 1;
            name
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while used.contains(&name) {
            name = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        used.insert(name.clone());
        names.push(name);
    }
    names
}

fn unpack_samples(card: &Card, samples_dir: &Path, quiet: bool) -> Result<()> {
    fs::create_dir_all(samples_dir).with_context(|| {
        format!(
            "Failed to create samples directory: {}",
            samples_dir.display()
        )
    })?;

    for (wave, dir_name) in card.waves.iter().zip(wave_directory_names(card)) {
        let wave_dir = samples_dir.join(&dir_name);

        if dir_name != wave.name && !quiet {
            let reason = if wave.name.is_empty() {
                "unnamed wave".to_string()
            } else if is_plain_file_name(&wave.name) {
                format!("duplicate wave name {:?}", wave.name)
            } else {
                format!("wave name {:?} is not a valid directory name", wave.name)
            };
            eprintln!(
                "{}: {}, extracting samples to {}",
                "warning".yellow().bold(),
                reason,
                wave_dir.display()
            );
        }

        fs::create_dir_all(&wave_dir)
            .with_context(|| format!("Failed to create wave directory: {}", wave_dir.display()))?;

        for (index, sample) in wave.samples.iter().enumerate() {
            write_sample(&wave_dir.join(format!("{}.wav", index)), &sample.data)?;
        }

        if !quiet {
            println!(
                "{}",
                format!(
                    "  wave {} -> {} ({} samples)",
                    dir_name,
                    wave_dir.display(),
                    wave.samples.len()
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sycard_format::{Sample, Wave};
    use tempfile::TempDir;

    fn wave(name: &str, samples: usize) -> Wave {
        Wave {
            name: name.to_string(),
            samples: (0..samples)
                .map(|i| Sample {
                    data: vec![i as i16; 4],
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn card(waves: Vec<Wave>) -> Card {
        Card {
            name: "BANK".to_string(),
            id: 3,
            waves,
        }
    }

    #[test]
    fn test_wave_directory_names() {
        let card = card(vec![wave("", 0), wave("PAD", 0), wave("", 0), wave("", 0)]);
        assert_eq!(
            wave_directory_names(&card),
            vec!["unnamed_wave_0", "PAD", "unnamed_wave_1", "unnamed_wave_2"]
        );
    }

    #[test]
    fn test_card_directory_existing_target() {
        let dir = TempDir::new().unwrap();
        let card = card(vec![]);
        assert_eq!(
            card_directory(&card, dir.path()).unwrap(),
            dir.path().join("BANK.wavecard")
        );
    }

    #[test]
    fn test_card_directory_new_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        assert_eq!(card_directory(&card(vec![]), &target).unwrap(), target);
    }

    #[test]
    fn test_plain_file_names() {
        assert!(is_plain_file_name("PIANO"));
        assert!(is_plain_file_name("A.B"));
        assert!(is_plain_file_name("..."));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name("."));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("/abs"));
        assert!(!is_plain_file_name("a/b"));
        assert!(!is_plain_file_name("a\\b"));
        assert!(!is_plain_file_name("NUL\0"));
    }

    #[test]
    fn test_wave_directory_names_unsafe_and_duplicate() {
        let card = card(vec![
            wave("/abs", 0),
            wave("..", 0),
            wave("PAD", 0),
            wave("PAD", 0),
            wave("", 0),
            wave("PAD_1", 0),
        ]);
        assert_eq!(
            wave_directory_names(&card),
            vec![
                "unnamed_wave_0",
                "unnamed_wave_1",
                "PAD",
                "PAD_1",
                "unnamed_wave_2",
                "PAD_1_1",
            ]
        );
    }

    #[test]
    fn test_card_directory_rejects_unsafe_card_name() {
        let dir = TempDir::new().unwrap();
        for name in ["/tmp/x", "../up", "a/b"] {
            let card = Card {
                name: name.to_string(),
                ..card(vec![])
            };
            let err = card_directory(&card, dir.path()).unwrap_err();
            assert!(err.to_string().contains("not a valid directory name"));
        }
    }

    #[test]
    fn test_unpack_keeps_files_inside_card_directory() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = dir.path().join("out");
        let absolute = outside.path().join("x");
        let card = card(vec![
            wave(absolute.to_str().unwrap(), 1),
            wave("..", 1),
            wave("KICK", 1),
            wave("KICK", 1),
        ]);

        let card_dir = unpack_card(&card, &target, true).unwrap();

        assert_eq!(fs::read_dir(outside.path()).unwrap().count(), 0);
        assert!(!dir.path().join("0.wav").exists());
        assert!(!target.join("0.wav").exists());

        let samples = card_dir.join(SAMPLES_DIR);
        let mut written: Vec<String> = fs::read_dir(&samples)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        written.sort();
        assert_eq!(
            written,
            vec!["KICK", "KICK_1", "unnamed_wave_0", "unnamed_wave_1"]
        );
        for name in &written {
            assert!(samples.join(name).join("0.wav").is_file());
        }
    }

    #[test]
    fn test_unpack_card_layout() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        let card = card(vec![wave("KICK", 2), wave("", 1)]);

        let card_dir = unpack_card(&card, &target, true).unwrap();
        assert_eq!(card_dir, target);

        assert!(card_dir.join("data.yaml").is_file());
        assert!(card_dir.join("samples/KICK/0.wav").is_file());
        assert!(card_dir.join("samples/KICK/1.wav").is_file());
        assert!(card_dir.join("samples/unnamed_wave_0/0.wav").is_file());
        assert!(!card_dir.join("samples/KICK/2.wav").exists());
    }

    #[test]
    fn test_unpack_into_existing_directory() {
        let dir = TempDir::new().unwrap();
        let card = card(vec![wave("SNARE", 1)]);

        let card_dir = unpack_card(&card, dir.path(), true).unwrap();
        assert_eq!(card_dir, dir.path().join("BANK.wavecard"));
        assert!(card_dir.join("samples/SNARE/0.wav").is_file());
    }

    #[test]
    fn test_unpack_twice_overwrites() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        let card = card(vec![wave("HAT", 1)]);

        unpack_card(&card, &target, true).unwrap();
        // Target now exists, so the second run nests a card directory.
        let second = unpack_card(&card, &target, true).unwrap();
        assert_eq!(second, target.join("BANK.wavecard"));
        assert!(second.join("data.yaml").is_file());
    }

    #[test]
    fn test_run_missing_card_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.card");
        let target = dir.path().join("out");

        let err = run(
            missing.to_str().unwrap(),
            target.to_str().unwrap(),
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing.card"));
        assert!(!target.exists());
    }
}
