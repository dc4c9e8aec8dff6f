mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lumen::config::LumenConfig;
use lumen::principles::PrincipleDraft;
use lumen::store::{EntryQuery, EntrySource, PrincipleCategory};

#[derive(Parser)]
#[command(name = "lumen", version, about = "Personality scoring and entity memory for journaling")]
struct Cli {
    /// Config file to use instead of ~/.lumen/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the personality questionnaire
    Questions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a JSON object of answers
    Score {
        /// Answers file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Extract entities from text and print them as JSON
    Extract {
        /// Text file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Extract entities from text and save them to a user's memory
    Remember {
        #[arg(long)]
        user: String,
        /// Text file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// List a user's most recently mentioned memory items
    Recall {
        #[arg(long)]
        user: String,
        /// Maximum items (defaults to memory.recall_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Score answers and store the personality profile
    Onboard {
        #[arg(long)]
        user: String,
        /// Answers file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Journal entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },
    /// A user's guiding principles
    Principle {
        #[command(subcommand)]
        action: PrincipleAction,
    },
    /// Show memory statistics for a user
    Stats {
        #[arg(long)]
        user: String,
    },
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Print a time-of-day greeting for a user
    Greet {
        #[arg(long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum EntryAction {
    /// Save new content into an existing entry
    Save {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        /// Content file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Create a new entry
    Add {
        #[arg(long)]
        user: String,
        /// Defaults to "Untitled Entry"
        #[arg(long)]
        title: Option<String>,
        /// text, voice, email or image
        #[arg(long, default_value_t = EntrySource::Text)]
        source: EntrySource,
        /// Content file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// List a user's entries, newest first
    List {
        #[arg(long)]
        user: String,
        #[arg(long, default_value_t = 50)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Only entries from this source (all sources if omitted)
        #[arg(long)]
        source: Option<EntrySource>,
        /// Case-insensitive text to find in the title or content
        #[arg(long)]
        search: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum PrincipleAction {
    /// Add a principle
    Add {
        #[arg(long)]
        user: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// core_value, life_principle, decision_rule or aspiration
        #[arg(long)]
        category: PrincipleCategory,
        /// May be repeated
        #[arg(long = "example")]
        examples: Vec<String>,
        /// Higher sorts first
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        priority: i32,
    },
    /// List principles, highest priority first
    List {
        #[arg(long)]
        user: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a principle
    Remove {
        #[arg(long)]
        user: String,
        #[arg(long)]
        id: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create or update a user
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LumenConfig::load_from(path)?,
        None => LumenConfig::load()?,
    };

    // Log to stderr so stdout stays clean for JSON output.
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Questions { json } => cli::quiz::questions(json)?,
        Command::Score { file } => cli::quiz::score(file.as_deref())?,
        Command::Extract { file } => cli::extract::extract(file.as_deref())?,
        Command::Remember { user, file } => {
            cli::recall::remember(&config, &user, file.as_deref())?;
        }
        Command::Recall { user, limit } => cli::recall::recall(&config, &user, limit)?,
        Command::Onboard { user, file } => {
            cli::quiz::onboard(&config, &user, file.as_deref())?;
        }
        Command::Entry { action } => match action {
            EntryAction::Save { id, title, file } => {
                cli::entry::save(&config, &id, &title, file.as_deref())?;
            }
            EntryAction::Add {
                user,
                title,
                source,
                file,
            } => {
                cli::entry::add(&config, &user, title.as_deref(), source, file.as_deref())?;
            }
            EntryAction::List {
                user,
                limit,
                offset,
                source,
                search,
                json,
            } => {
                let query = EntryQuery {
                    limit,
                    offset,
                    source,
                    search,
                };
                cli::entry::list(&config, &user, &query, json)?;
            }
        },
        Command::Principle { action } => match action {
            PrincipleAction::Add {
                user,
                title,
                description,
                category,
                examples,
                priority,
            } => {
                let draft = PrincipleDraft {
                    title,
                    description,
                    category,
                    examples,
                    priority,
                };
                cli::principle::add(&config, &user, &draft)?;
            }
            PrincipleAction::List { user, json } => cli::principle::list(&config, &user, json)?,
            PrincipleAction::Remove { user, id } => cli::principle::remove(&config, &user, &id)?,
        },
        Command::Stats { user } => cli::stats::stats(&config, &user)?,
        Command::User { action } => match action {
            UserAction::Add { id, email, name } => {
                cli::user::add(&config, &id, &email, name.as_deref())?;
            }
        },
        Command::Greet { user } => cli::user::greet(&config, &user)?,
    }

    Ok(())
}
