use anyhow::Result;

use mnemo::numbers::NumberAssociation;

use crate::app::App;
use crate::OutputFormat;

pub fn run_set(app: &mut App, number: &str, word: &str, notes: Option<String>) -> Result<()> {
    let mut association = NumberAssociation::new(word.to_string());
    if let Some(notes) = notes {
        association = association.with_notes(notes);
    }
    app.profile.numbers.set_association(number, association)?;
    app.save()?;

    println!("{} = \"{}\"", number, word);
    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat) -> Result<()> {
    let numbers = &app.profile.numbers;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = numbers
                .associated_numbers()
                .iter()
                .filter_map(|n| numbers.get_association(n).map(|a| (n, a)))
                .map(|(number, association)| {
                    serde_json::json!({
                        "number": number,
                        "word": association.word,
                        "notes": association.notes,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for number in numbers.associated_numbers() {
                if let Some(association) = numbers.get_association(&number) {
                    match &association.notes {
                        Some(notes) => println!("{}  {}  ({})", number, association.word, notes),
                        None => println!("{}  {}", number, association.word),
                    }
                }
            }
            println!("\n{} of 100 pegged", numbers.progress_count());
        }
    }
    Ok(())
}

pub fn run_remove(app: &mut App, number: &str) -> Result<()> {
    app.profile.numbers.remove_association(number)?;
    app.save()?;

    println!("Removed peg for {}.", number);
    Ok(())
}
