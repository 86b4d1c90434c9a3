// Devotee Records command line
// Main entry point

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use devotee_records::models::display::DisplayLanguage;
use devotee_records::models::occasion::{Bucket, Dashboard, OccasionInstance, OccasionKey, OccasionType};
use devotee_records::models::person::Person;
use devotee_records::services::database::Database;
use devotee_records::services::occasion::{ledger, OccasionService};
use devotee_records::services::person::{toggle_and_persist, PersonRepository, PersonService};
use devotee_records::services::settings::{resolve_database_path, SettingsService};
use devotee_records::utils::date::parse_calendar_date;

/// Birthday and anniversary reminders for temple devotees
#[derive(Parser)]
#[command(name = "devotee-records")]
#[command(about = "Track devotee birthdays, anniversaries and blessing calls", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display language for names (english, local, both)
    #[arg(long, global = true)]
    language: Option<DisplayLanguage>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today, tomorrow, this week and the next 30 days
    Dashboard {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List occasions falling on one day
    SearchDay {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// List every occasion between two dates, inclusive
    SearchRange { start: String, end: String },
    /// Mark an occasion as blessed, or reset it
    Toggle {
        person_id: String,
        /// Birthday, Anniversary, SpouseBirthday or ChildBirthday
        occasion_type: OccasionType,
        /// Date of this year's occurrence (YYYY-MM-DD)
        date: String,
        /// Spouse or child name for related-person occasions
        #[arg(long)]
        related: Option<String>,
    },
    /// Search the devotee directory
    List {
        #[arg(long, default_value = "")]
        term: String,
        #[arg(long)]
        gothram: Option<String>,
    },
    /// Show a devotee's blessing history, newest first
    History { person_id: String },
    /// Import a JSON snapshot
    Import { path: PathBuf },
    /// Export all records to a JSON snapshot
    Export { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path(),
    };
    let settings = settings_service.load()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level.as_str()))
        .init();
    log::info!("Starting devotee-records (config: {})", settings_service.path().display());

    let db_path = resolve_database_path(&settings);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }
    let db = Database::open(&db_path)?;
    db.initialize_schema()?;

    let people = PersonService::new(db.connection());
    let occasions = OccasionService::from_settings(&settings);
    let language = cli.language.unwrap_or(settings.display_language);
    let json = cli.json;

    match cli.command {
        Commands::Dashboard { date } => {
            let snapshot = people.load_people()?;
            let dashboard = match date {
                Some(date) => occasions.get_dashboard(&snapshot, &date)?,
                None => occasions.get_dashboard_for_today(&snapshot),
            };
            if json {
                print_json(&dashboard)?;
            } else {
                print_dashboard(&dashboard, language);
            }
        }
        Commands::SearchDay { date } => {
            let results = occasions.search_single_day(&people.load_people()?, &date)?;
            print_instances(&results, language, json)?;
        }
        Commands::SearchRange { start, end } => {
            let results = occasions.search_range(&people.load_people()?, &start, &end)?;
            print_instances(&results, language, json)?;
        }
        Commands::Toggle {
            person_id,
            occasion_type,
            date,
            related,
        } => {
            let updated = toggle_and_persist(
                &people,
                &occasions,
                &person_id,
                occasion_type,
                &date,
                related.as_deref(),
            )?;
            let key = OccasionKey::new(occasion_type, parse_calendar_date(&date)?, related.as_deref());
            let done = ledger::is_completed(&updated.completion_log, &key);
            println!(
                "{} {} for {} on {}",
                if done { "Marked" } else { "Reset" },
                occasion_type,
                language.select(&updated.full_name),
                date
            );
        }
        Commands::List { term, gothram } => {
            let found = people.search_directory(&term, gothram.as_deref())?;
            if json {
                print_json(&found)?;
            } else {
                print_directory(&found, language);
            }
        }
        Commands::History { person_id } => {
            let history = people.completion_history(&person_id)?;
            if json {
                print_json(&history)?;
            } else if history.is_empty() {
                println!("No past blessings recorded.");
            } else {
                for record in history {
                    let related = record
                        .related_person
                        .map(|name| format!(" ({})", name))
                        .unwrap_or_default();
                    println!(
                        "{}  {}{} blessing, called {}",
                        record.occasion_date,
                        record.occasion_type,
                        related,
                        record.completed_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        Commands::Import { path } => {
            let count = people.import_snapshot(&path)?;
            println!("Imported {} records from {}", count, path.display());
        }
        Commands::Export { path } => {
            let count = people.export_snapshot(&path)?;
            println!("Exported {} records to {}", count, path.display());
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn bucket_heading(bucket: Bucket, language: DisplayLanguage) -> String {
    let local = match bucket {
        Bucket::Today => "నేడు",
        Bucket::Tomorrow => "రేపు",
        Bucket::Next7Days => "ఈ వారం",
        Bucket::Next30Days => "వచ్చే 30 రోజులు",
    };
    language.pick(bucket.label(), local)
}

fn print_dashboard(dashboard: &Dashboard, language: DisplayLanguage) {
    for bucket in Bucket::ALL {
        let instances = dashboard.bucket(bucket);
        println!("{} ({})", bucket_heading(bucket, language), instances.len());
        if instances.is_empty() {
            println!("  None.");
        }
        for instance in instances {
            println!("  {}", format_instance(instance, language));
        }
    }
}

fn print_instances(instances: &[OccasionInstance], language: DisplayLanguage, json: bool) -> Result<()> {
    if json {
        return print_json(instances);
    }

    if instances.is_empty() {
        println!("No occasions found.");
    }
    for instance in instances {
        println!("{}", format_instance(instance, language));
    }
    Ok(())
}

fn format_instance(instance: &OccasionInstance, language: DisplayLanguage) -> String {
    let related = instance
        .related_person
        .as_deref()
        .map(|name| format!(" ({})", language.select(name)))
        .unwrap_or_default();
    let status = if instance.is_completed { "  [done]" } else { "" };

    format!(
        "{}  {:<15} {}{}  #{}{}",
        instance.concrete_date,
        instance.occasion_type.as_str(),
        language.select(&instance.person_name),
        related,
        instance.person_id,
        status
    )
}

fn print_directory(people: &[Person], language: DisplayLanguage) {
    if people.is_empty() {
        println!("No records found.");
    }
    for person in people {
        println!(
            "#{}  {}  {}  {}",
            person.id,
            language.select(&person.full_name),
            person.phone_number,
            language.select(&person.gothram)
        );
    }
}
