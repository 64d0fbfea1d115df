use chrono::NaiveDate;
use clap::Subcommand;
use optimark_core::AppError;
use optimark_models::{CreateOfferDto, SemesterId, UpdateOfferDto};
use sqlx::PgPool;

use crate::modules::offers::service::OfferService;
use crate::output::{Table, date, render_record};

#[derive(Debug, Subcommand)]
pub enum OfferCommand {
    /// Offer a course in the semester containing --date (default today)
    ///
    /// The course and semester are created when they do not exist yet.
    Create {
        course_code: String,
        /// Course name, used when the course is new
        course_name: String,
        /// Enrollment date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show an offering
    Get {
        course_code: String,
        semester_id: SemesterId,
    },
    /// List offerings
    List {
        /// Only show offerings in this semester
        #[arg(long)]
        semester: Option<SemesterId>,
    },
    /// Move, rename or recode an offering
    Update {
        course_code: String,
        semester_id: SemesterId,
        /// New enrollment date; moves the offering to that date's semester
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Rename the course
        #[arg(long)]
        name: Option<String>,
        /// Recode the course
        #[arg(long = "new-code", alias = "new_code")]
        new_code: Option<String>,
    },
    /// Delete an offering
    Delete {
        course_code: String,
        semester_id: SemesterId,
    },
}

pub async fn run(db: &PgPool, command: OfferCommand) -> Result<(), AppError> {
    match command {
        OfferCommand::Create {
            course_code,
            course_name,
            date: enrolled_at,
        } => {
            let created = OfferService::create_offer(
                db,
                CreateOfferDto {
                    course_code,
                    course_name: course_name.clone(),
                    enrolled_at,
                },
            )
            .await?;

            if created.semester_created {
                println!("Semester {} created.", created.offer.semester_id);
            }
            if created.course_created {
                println!(
                    "Course {}-{} created.",
                    created.offer.course_code, course_name
                );
            }
            println!(
                "{}-{} offered in semester {} (enrolled {}).",
                created.offer.course_code,
                course_name,
                created.offer.semester_id,
                date(&created.offer.enrolled_at)
            );
        }
        OfferCommand::Get {
            course_code,
            semester_id,
        } => {
            let offer = OfferService::get_offer(db, &course_code, &semester_id).await?;
            println!(
                "{}",
                render_record(&[
                    ("COURSE_CODE", offer.course_code),
                    ("COURSE_NAME", offer.course_name),
                    ("SEMESTER_ID", offer.semester_id.to_string()),
                    ("ENROLLED_AT", date(&offer.enrolled_at)),
                ])
            );
        }
        OfferCommand::List { semester } => {
            let offers = OfferService::list_offers(db, semester.as_ref()).await?;
            if offers.is_empty() {
                println!("No offerings found.");
                return Ok(());
            }

            let mut table = Table::new(&["COURSE_CODE", "COURSE_NAME", "SEMESTER_ID", "ENROLLED_AT"]);
            for o in offers {
                table.push_row([
                    o.course_code,
                    o.course_name,
                    o.semester_id.to_string(),
                    date(&o.enrolled_at),
                ]);
            }
            println!("{}", table.render());
        }
        OfferCommand::Update {
            course_code,
            semester_id,
            date: enrolled_at,
            name,
            new_code,
        } => {
            let offer = OfferService::update_offer(
                db,
                &course_code,
                &semester_id,
                UpdateOfferDto {
                    enrolled_at,
                    course_name: name,
                    new_course_code: new_code,
                },
            )
            .await?;
            println!(
                "Offering {} in {} updated: {} in {} (enrolled {}).",
                course_code,
                semester_id,
                offer.course_code,
                offer.semester_id,
                date(&offer.enrolled_at)
            );
        }
        OfferCommand::Delete {
            course_code,
            semester_id,
        } => {
            OfferService::delete_offer(db, &course_code, &semester_id).await?;
            println!("Offering {} in {} deleted.", course_code, semester_id);
        }
    }
    Ok(())
}
