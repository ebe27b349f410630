//! Info command implementation
//!
//! Decodes a card image and prints what it contains without writing any
//! files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use sycard_format::{load_card, Card, SAMPLE_RATE};

use crate::metadata::CardDocument;

/// Run the info command
///
/// # Arguments
/// * `card_file` - Path to the card image
/// * `json` - Print the metadata document as JSON instead of a summary
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(card_file: &str, json: bool) -> Result<ExitCode> {
    let card = load_card(card_file)?;

    if json {
        let out = CardDocument::from(&card)
            .to_json()
            .context("Failed to serialize card metadata")?;
        println!("{}", out);
    } else {
        print!("{}", summary(&card));
    }

    Ok(ExitCode::SUCCESS)
}

/// Human-readable summary of a card, one line per wave and sample.
pub fn summary(card: &Card) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} (id {})\n",
        "Card:".cyan().bold(),
        card.name,
        card.id
    ));
    out.push_str(&format!(
        "  {} waves, {} samples\n",
        card.waves.len(),
        card.sample_count()
    ));

    for (i, wave) in card.waves.iter().enumerate() {
        let name = if wave.name.is_empty() {
            "(unnamed)".dimmed().to_string()
        } else {
            wave.name.bold().to_string()
        };
        out.push_str(&format!("  [{}] {}\n", i, name));

        for (j, sample) in wave.samples.iter().enumerate() {
            let seconds = sample.len() as f64 / f64::from(SAMPLE_RATE);
            out.push_str(&format!(
                "      {:>3}: key {:<4} vol {:>3}  pitch {:>4}  {:<12} #{:<3} {} frames ({:.3}s)\n",
                j,
                sample.note_name(),
                sample.volume,
                sample.pitch,
                sample.loop_mode.name(),
                sample.sample_no,
                sample.len(),
                seconds
            ));
        }
    }

    out
}
