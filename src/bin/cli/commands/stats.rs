use anyhow::Result;
use chrono::Utc;

use mnemo::queue::available_categories;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let profile = &app.profile;
    let now = Utc::now();
    let categories = available_categories(profile, now);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "pegs": profile.numbers.progress_count(),
                "events": profile.events.total_events(),
                "yearsWithEvents": profile.events.years_with_events().len(),
                "categories": categories,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Pegs: {} of 100 · Events: {} across {} years",
                profile.numbers.progress_count(),
                profile.events.total_events(),
                profile.events.years_with_events().len(),
            );

            if categories.is_empty() {
                println!("\nNothing is due. Well done!");
                return Ok(());
            }

            println!("\nReady to practice:");
            for info in &categories {
                println!("  {:>4}  {}", info.count, info.category);
            }
        }
    }
    Ok(())
}
