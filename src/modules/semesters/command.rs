use chrono::NaiveDate;
use clap::Subcommand;
use optimark_core::AppError;
use optimark_models::SemesterId;
use sqlx::PgPool;

use crate::modules::semesters::service::SemesterService;
use crate::output::{Table, date, render_record};

#[derive(Debug, Subcommand)]
pub enum SemesterCommand {
    /// Create the semester containing DATE (YYYY-MM-DD)
    Create {
        /// Any date inside the semester
        date: NaiveDate,
    },
    /// Show a semester
    Get {
        /// 6-character semester code, e.g. 2425S1
        id: SemesterId,
    },
    /// List all semesters, newest first
    List,
    /// Delete a semester and its offerings
    Delete {
        id: SemesterId,
    },
}

pub async fn run(db: &PgPool, command: SemesterCommand) -> Result<(), AppError> {
    match command {
        SemesterCommand::Create { date: day } => {
            let semester = SemesterService::create_semester(db, day).await?;
            println!(
                "Semester {} created: from {} to {}",
                semester.id,
                date(&semester.start_date),
                date(&semester.end_date)
            );
        }
        SemesterCommand::Get { id } => {
            let semester = SemesterService::get_semester(db, &id).await?;
            println!(
                "{}",
                render_record(&[
                    ("ID", semester.id.to_string()),
                    ("START_DATE", date(&semester.start_date)),
                    ("END_DATE", date(&semester.end_date)),
                ])
            );
        }
        SemesterCommand::List => {
            let semesters = SemesterService::list_semesters(db).await?;
            if semesters.is_empty() {
                println!("No semesters found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "START_DATE", "END_DATE"]);
            for s in &semesters {
                table.push_row([s.id.to_string(), date(&s.start_date), date(&s.end_date)]);
            }
            println!("{}", table.render());
        }
        SemesterCommand::Delete { id } => {
            SemesterService::delete_semester(db, &id).await?;
            println!("Semester {} deleted.", id);
        }
    }
    Ok(())
}
