use anyhow::{bail, Result};
use uuid::Uuid;

use mnemo::years::{parse_year_id, year_id};

use crate::app::App;
use crate::OutputFormat;

pub fn run_add(
    app: &mut App,
    year: &str,
    content: &str,
    image: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let year = parse_year_id(year)?;
    let id = app.profile.events.add_event(
        year,
        content.to_string(),
        image.unwrap_or_default(),
    )?;
    if notes.is_some() {
        app.profile.events.update_event(id, None, None, notes)?;
    }
    app.save()?;

    println!("Added {} to {}.", id, year_id(year));
    Ok(())
}

pub fn run_list(app: &App, year: Option<&str>, format: &OutputFormat) -> Result<()> {
    let events = &app.profile.events;

    let listed: Vec<&mnemo::events::Event> = match year {
        Some(year) => events.events_for_year(parse_year_id(year)?),
        None => events
            .years_with_events()
            .into_iter()
            .flat_map(|y| events.events_for_year(y))
            .collect(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        OutputFormat::Plain => {
            if listed.is_empty() {
                println!("No events recorded.");
                return Ok(());
            }
            for event in &listed {
                println!("{}  {}  [{}]", year_id(event.year), event.content, event.id);
                if !event.mental_image.is_empty() {
                    println!("      {}", event.mental_image);
                }
            }
            println!("\n{} events total", listed.len());
        }
    }
    Ok(())
}

pub fn run_remove(app: &mut App, id: &str) -> Result<()> {
    let Ok(id) = Uuid::parse_str(id) else {
        bail!("Not an event id: {}", id);
    };
    app.profile.events.remove_event(id)?;
    app.save()?;

    println!("Removed {}.", id);
    Ok(())
}
