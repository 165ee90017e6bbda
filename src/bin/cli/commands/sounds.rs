use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run_list(app: &App, format: &OutputFormat) -> Result<()> {
    let digits = &app.profile.digits;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = digits
                .associated_digits()
                .iter()
                .filter_map(|d| digits.get_association(*d).map(|a| (d, a)))
                .map(|(digit, association)| {
                    serde_json::json!({
                        "digit": digit,
                        "sounds": association.sounds,
                        "notes": association.notes,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for digit in digits.associated_digits() {
                if let Some(association) = digits.get_association(digit) {
                    println!("{}  {}", digit, association.sounds.join(", "));
                    if let Some(notes) = &association.notes {
                        println!("   {}", notes);
                    }
                }
            }
            let ignored = digits.ignored_sounds();
            if !ignored.sounds.is_empty() {
                println!("\nignored: {}", ignored.sounds.join(", "));
            }
        }
    }
    Ok(())
}

pub fn run_set(app: &mut App, digit: u32, sounds: &str, notes: Option<String>) -> Result<()> {
    let sounds: Vec<String> = sounds
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    app.profile.digits.update_digit_sounds(digit, sounds, notes)?;
    app.save()?;

    println!("Updated sounds for {}.", digit);
    Ok(())
}

pub fn run_reset(app: &mut App) -> Result<()> {
    app.profile.digits.reset_to_defaults();
    app.save()?;

    println!("Restored the default Major System table.");
    Ok(())
}
