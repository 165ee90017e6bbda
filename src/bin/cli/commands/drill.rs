use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;

use mnemo::numbers::NumberAssociation;
use mnemo::srs::algorithm::{format_interval, preview_intervals};
use mnemo::srs::{CardState, Rating};
use mnemo::years::parse_year_id;
use mnemo::{QueueTask, TaskCategory, TaskQueue};

use crate::app::App;

pub fn run(app: &mut App, limit: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut queue = match seed {
        Some(seed) => TaskQueue::with_seed(seed),
        None => TaskQueue::new(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut done = 0usize;

    loop {
        if limit.map_or(false, |limit| done >= limit) {
            break;
        }

        let now = Utc::now();
        let Some(task) = queue.pick_next_task(&app.profile, now) else {
            println!("Nothing to practice right now. Come back later!");
            break;
        };

        println!();
        println!("── {} ──", task.category);
        let finished = match task.category {
            TaskCategory::CreateNumberAssociation => prompt_new_peg(app, &task, &mut input)?,
            TaskCategory::CreateEventsForYear => prompt_new_event(app, &task, &mut input)?,
            _ => review(app, &mut queue, &task, &mut input)?,
        };
        app.save()?;

        if !finished {
            break;
        }
        done += 1;
    }

    if done > 0 {
        println!("\n{} exercises done.", done);
    }
    Ok(())
}

/// Show the question, wait for reveal, show the answer, read a rating.
/// Returns false when the learner quits.
fn review(
    app: &mut App,
    queue: &mut TaskQueue,
    task: &QueueTask,
    input: &mut impl BufRead,
) -> Result<bool> {
    let profile = &app.profile;
    let (question, answer) = match task.category {
        TaskCategory::RememberWordByNumber => {
            let association = profile.numbers.get_association(&task.identifier);
            (
                format!("What is your word for {}?", task.identifier),
                association.map(|a| a.word.clone()).unwrap_or_default(),
            )
        }
        TaskCategory::RememberNumberByWord => {
            let association = profile.numbers.get_association(&task.identifier);
            (
                format!(
                    "Which number is \"{}\"?",
                    association.map(|a| a.word.as_str()).unwrap_or_default()
                ),
                task.identifier.clone(),
            )
        }
        TaskCategory::RememberSoundByDigit => {
            let digit: u8 = task.identifier.parse().unwrap_or_default();
            let association = profile.digits.get_association(digit);
            (
                format!("Which sounds belong to {}?", task.identifier),
                association.map(|a| a.sounds.join(", ")).unwrap_or_default(),
            )
        }
        TaskCategory::RememberDigitBySound => {
            let digit: u8 = task.identifier.parse().unwrap_or_default();
            let association = profile.digits.get_association(digit);
            (
                format!(
                    "Which digit do these sounds belong to: {}?",
                    association.map(|a| a.sounds.join(", ")).unwrap_or_default()
                ),
                task.identifier.clone(),
            )
        }
        TaskCategory::RememberEventsByYear => {
            let year = parse_year_id(&task.identifier)?;
            let events: Vec<String> = profile
                .events
                .events_for_year(year)
                .iter()
                .map(|e| e.content.clone())
                .collect();
            (
                format!("What happened in {}?", task.identifier),
                events.join("; "),
            )
        }
        TaskCategory::RememberYearByEvent => {
            let id = uuid::Uuid::parse_str(&task.identifier)?;
            let event = profile.events.get_event(id);
            (
                format!(
                    "When did this happen: \"{}\"?",
                    event.map(|e| e.content.as_str()).unwrap_or_default()
                ),
                event
                    .map(|e| mnemo::years::year_id(e.year))
                    .unwrap_or_default(),
            )
        }
        TaskCategory::CreateNumberAssociation | TaskCategory::CreateEventsForYear => {
            unreachable!("creation tasks are handled separately")
        }
    };

    println!("{}", question);
    print!("  (enter to reveal, q to quit) ");
    io::stdout().flush()?;
    let line = read_line(input)?;
    if line.trim() == "q" {
        return Ok(false);
    }

    println!("  → {}", answer);

    let now = Utc::now();
    if let Some(direction) = task.category.direction() {
        let state =
            card_for(&app.profile, task, direction).unwrap_or_else(|| CardState::fresh(now));
        let [wrong, hard, good, easy] = preview_intervals(&state, now);
        println!(
            "  w {} · h {} · g {} · e {}",
            format_interval(wrong),
            format_interval(hard),
            format_interval(good),
            format_interval(easy)
        );
    }

    print!("  How did you do? [w]rong / [h]ard / [g]ood / [e]asy: ");
    io::stdout().flush()?;
    let rating = Rating::from_str_lossy(&read_line(input)?);

    queue.record_outcome(&mut app.profile, task, rating, Utc::now())?;

    // Show where the card landed
    if let Some(direction) = task.category.direction() {
        if let Some(card) = card_for(&app.profile, task, direction) {
            println!("  Next review in {}", format_interval(card.interval));
        }
    }
    Ok(true)
}

fn card_for(
    profile: &mnemo::Profile,
    task: &QueueTask,
    direction: mnemo::Direction,
) -> Option<CardState> {
    use mnemo::Direction;
    match direction {
        Direction::NumberToWord => profile
            .numbers
            .get_association(&task.identifier)?
            .number_to_word
            .clone(),
        Direction::WordToNumber => profile
            .numbers
            .get_association(&task.identifier)?
            .word_to_number
            .clone(),
        Direction::DigitToSound => profile
            .digits
            .get_association(task.identifier.parse().ok()?)?
            .digit_to_sound
            .clone(),
        Direction::SoundToDigit => profile
            .digits
            .get_association(task.identifier.parse().ok()?)?
            .sound_to_digit
            .clone(),
        Direction::YearToEvents => profile
            .years
            .get_year(parse_year_id(&task.identifier).ok()?)?
            .year_to_events
            .clone(),
        Direction::EventToYear => profile
            .events
            .get_event(uuid::Uuid::parse_str(&task.identifier).ok()?)?
            .event_to_year
            .clone(),
    }
}

/// Author a peg word inline. Returns false when the learner quits.
fn prompt_new_peg(app: &mut App, task: &QueueTask, input: &mut impl BufRead) -> Result<bool> {
    println!("{} has no peg word yet.", task.identifier);
    print!("  Invent one (empty to skip, q to quit): ");
    io::stdout().flush()?;

    let line = read_line(input)?;
    let word = line.trim();
    match word {
        "q" => Ok(false),
        "" => Ok(true),
        word => {
            app.profile
                .numbers
                .set_association(&task.identifier, NumberAssociation::new(word.to_string()))?;
            println!("  {} = \"{}\"", task.identifier, word);
            Ok(true)
        }
    }
}

/// Author an event inline. Returns false when the learner quits.
fn prompt_new_event(app: &mut App, task: &QueueTask, input: &mut impl BufRead) -> Result<bool> {
    let year = parse_year_id(&task.identifier)?;
    println!("Year {} has no events yet.", task.identifier);
    print!("  What happened? (empty to skip, q to quit): ");
    io::stdout().flush()?;

    let line = read_line(input)?;
    let content = line.trim();
    match content {
        "q" => Ok(false),
        "" => Ok(true),
        content => {
            print!("  Mental image: ");
            io::stdout().flush()?;
            let image = read_line(input)?.trim().to_string();
            app.profile
                .events
                .add_event(year, content.to_string(), image)?;
            println!("  Added to {}.", task.identifier);
            Ok(true)
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    Ok(buf)
}
