mod app;
mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mnemo", about = "Memory training: pegs, sounds, and year events", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Practice: draws exercises until you stop or run out
    Drill {
        /// Stop after this many exercises
        #[arg(long)]
        limit: Option<usize>,

        /// Seed the task picker (useful for reproducing a session)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Peg words for two-digit numbers
    #[command(subcommand)]
    Peg(PegCommand),

    /// The digit sound table
    #[command(subcommand)]
    Sounds(SoundsCommand),

    /// Historical events attached to years
    #[command(subcommand)]
    Event(EventCommand),

    /// Show authoring progress and what is due
    Stats,
}

#[derive(Subcommand)]
enum PegCommand {
    /// Set the peg word for a number (00-99)
    Set {
        number: String,
        word: String,
        /// Optional notes about the association
        #[arg(long)]
        notes: Option<String>,
    },

    /// List all peg words
    List,

    /// Remove a peg word
    Remove { number: String },
}

#[derive(Subcommand)]
enum SoundsCommand {
    /// Show the digit sound table
    List,

    /// Replace the sounds for a digit (0-9)
    Set {
        digit: u32,
        /// Comma-separated sounds
        sounds: String,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Restore the default Major System table
    Reset,
}

#[derive(Subcommand)]
enum EventCommand {
    /// Add an event to a year
    Add {
        /// Year 0000-2025
        year: String,
        /// What happened
        content: String,
        /// The mental image anchoring the event
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// List events, optionally for a single year
    List {
        #[arg(long)]
        year: Option<String>,
    },

    /// Remove an event by id
    Remove { id: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Drill { limit, seed } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::drill::run(&mut app, limit, seed)?;
        }
        Command::Peg(subcmd) => {
            let mut app = app::App::new(cli.data_dir)?;
            match subcmd {
                PegCommand::Set { number, word, notes } => {
                    commands::peg::run_set(&mut app, &number, &word, notes)?;
                }
                PegCommand::List => commands::peg::run_list(&app, &cli.format)?,
                PegCommand::Remove { number } => commands::peg::run_remove(&mut app, &number)?,
            }
        }
        Command::Sounds(subcmd) => {
            let mut app = app::App::new(cli.data_dir)?;
            match subcmd {
                SoundsCommand::List => commands::sounds::run_list(&app, &cli.format)?,
                SoundsCommand::Set { digit, sounds, notes } => {
                    commands::sounds::run_set(&mut app, digit, &sounds, notes)?;
                }
                SoundsCommand::Reset => commands::sounds::run_reset(&mut app)?,
            }
        }
        Command::Event(subcmd) => {
            let mut app = app::App::new(cli.data_dir)?;
            match subcmd {
                EventCommand::Add { year, content, image, notes } => {
                    commands::event::run_add(&mut app, &year, &content, image, notes)?;
                }
                EventCommand::List { year } => {
                    commands::event::run_list(&app, year.as_deref(), &cli.format)?;
                }
                EventCommand::Remove { id } => commands::event::run_remove(&mut app, &id)?,
            }
        }
        Command::Stats => {
            let app = app::App::new(cli.data_dir)?;
            commands::stats::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
