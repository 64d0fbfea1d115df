//! Command-line surface of the `optimark` binary.
//!
//! Every entity group (`course`, `offer`, ...) owns its subcommand enum in
//! `modules::<entity>::command`; this module only wires them together and
//! adds the database maintenance commands.

pub mod seeder;

use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use optimark_config::SchemaConfig;
use optimark_core::AppError;
use optimark_db::schema;
use optimark_models::Roster;
use sqlx::PgPool;

use crate::cli::seeder::{SeedCounts, seed_database};
use crate::modules::courses::command::{self as courses, CourseCommand};
use crate::modules::members::command::{self as members, MemberCommand};
use crate::modules::offers::command::{self as offers, OfferCommand};
use crate::modules::semesters::command::{self as semesters, SemesterCommand};
use crate::modules::tasks::command::{self as tasks, TaskCommand};
use crate::modules::users::command::{self as users, UserCommand};

#[derive(Debug, Parser)]
#[command(name = "optimark")]
#[command(about = "OptiMark - Manage courses, semesters, offerings, staff and students", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage courses
    #[command(subcommand)]
    Course(CourseCommand),
    /// Manage course offerings
    #[command(subcommand)]
    Offer(OfferCommand),
    /// Manage semesters
    #[command(subcommand)]
    Semester(SemesterCommand),
    /// Manage staff members
    #[command(subcommand)]
    Staff(MemberCommand),
    /// Manage students
    #[command(subcommand)]
    Student(MemberCommand),
    /// Manage generic user accounts
    #[command(subcommand)]
    User(UserCommand),
    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommand),
    /// Create the tables from the schema file
    InitDb,
    /// Drop every table and recreate them from the schema file
    ResetDb {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Seed the database with fake students and staff
    Seed {
        /// Number of students to create
        #[arg(long, default_value = "20")]
        students: usize,

        /// Number of staff members to create
        #[arg(long, default_value = "5")]
        staff: usize,
    },
}

/// Runs one parsed command against the database.
pub async fn dispatch(db: &PgPool, schema_config: &SchemaConfig, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Course(cmd) => courses::run(db, cmd).await,
        Commands::Offer(cmd) => offers::run(db, cmd).await,
        Commands::Semester(cmd) => semesters::run(db, cmd).await,
        Commands::Staff(cmd) => members::run(db, Roster::Staff, cmd).await,
        Commands::Student(cmd) => members::run(db, Roster::Students, cmd).await,
        Commands::User(cmd) => users::run(db, cmd).await,
        Commands::Task(cmd) => tasks::run(db, cmd).await,
        Commands::InitDb => {
            let count = schema::init_db(db, schema_config).await?;
            println!(
                "Database initialized from {} ({} statements).",
                schema_config.path.display(),
                count
            );
            Ok(())
        }
        Commands::ResetDb { yes } => {
            if !yes && !confirm_reset()? {
                println!("Reset cancelled.");
                return Ok(());
            }

            let count = schema::reset_db(db, schema_config).await?;
            println!(
                "Database reset from {} ({} statements).",
                schema_config.path.display(),
                count
            );
            Ok(())
        }
        Commands::Seed { students, staff } => {
            seed_database(db, SeedCounts { students, staff }).await?;
            Ok(())
        }
    }
}

fn confirm_reset() -> Result<bool, AppError> {
    let confirmed = Confirm::new()
        .with_prompt("This drops every table and all data. Continue?")
        .default(false)
        .interact()?;
    Ok(confirmed)
}
