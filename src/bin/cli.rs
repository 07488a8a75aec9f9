//! giftr CLI
//!
//! Command-line front end over the entity store: presentation glue that
//! reads the current collection and invokes store operations. State
//! lives in a file-backed key-value directory.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use giftr::{model, Config, FileBackend, GiftStore, Person, Result, UuidGenerator};

/// giftr CLI
#[derive(Parser, Debug)]
#[command(name = "giftr-cli")]
#[command(about = "Track gift ideas for the people in your life")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./giftr_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a person
    AddPerson {
        /// Display name
        name: String,

        /// Date of birth, YYYY-MM-DD
        dob: String,
    },

    /// Add a gift idea to a person
    AddIdea {
        /// The person's id
        person_id: String,

        /// Short idea description
        text: String,

        /// Photo reference (file path or URI)
        #[arg(long, default_value = "")]
        img: String,

        /// Photo width in pixels
        #[arg(long, default_value = "0")]
        width: f64,

        /// Photo height in pixels
        #[arg(long, default_value = "0")]
        height: f64,
    },

    /// Delete a gift idea
    DeleteIdea {
        /// The person's id
        person_id: String,

        /// The idea's id
        idea_id: String,
    },

    /// Delete a person and all their ideas
    DeletePerson {
        /// The person's id
        person_id: String,
    },

    /// Show one person and their ideas
    Show {
        /// The person's id
        person_id: String,
    },

    /// List all people
    List {
        /// Sort by calendar birthday (month, then day) instead of
        /// insertion order
        #[arg(long)]
        by_birthday: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();
    let backend = Arc::new(FileBackend::open(&config.data_dir)?);
    let store = GiftStore::new(config, backend, Arc::new(UuidGenerator))?;
    store.load().await;

    match args.command {
        Commands::AddPerson { name, dob } => {
            let person = store.add_person(name, dob).await?;
            println!("added person {} ({})", person.name, person.id);
        }
        Commands::AddIdea {
            person_id,
            text,
            img,
            width,
            height,
        } => {
            let idea = store.add_idea(&person_id, text, img, width, height).await?;
            println!("added idea {} ({})", idea.text, idea.id);
        }
        Commands::DeleteIdea { person_id, idea_id } => {
            store.delete_idea(&person_id, &idea_id).await?;
            println!("deleted idea {idea_id}");
        }
        Commands::DeletePerson { person_id } => {
            store.delete_person(&person_id).await?;
            println!("deleted person {person_id}");
        }
        Commands::Show { person_id } => match store.get_person(&person_id) {
            Some(person) => print_person(&person),
            None => println!("no person with id {person_id}"),
        },
        Commands::List { by_birthday } => {
            let people = store.people();
            if people.is_empty() {
                println!("no people yet");
            } else if by_birthday {
                for person in model::by_birthday(&people) {
                    print_person(&person);
                }
            } else {
                for person in people.iter() {
                    print_person(person);
                }
            }
        }
    }

    Ok(())
}

/// Print one person with their ideas
fn print_person(person: &Person) {
    println!("{} ({}) born {}", person.name, person.id, person.dob);
    for idea in &person.ideas {
        if idea.img.is_empty() {
            println!("  - {} ({})", idea.text, idea.id);
        } else {
            println!(
                "  - {} ({}) [{} {}x{}]",
                idea.text, idea.id, idea.img, idea.width, idea.height
            );
        }
    }
}
