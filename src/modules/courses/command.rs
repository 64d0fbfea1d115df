use clap::Subcommand;
use optimark_core::AppError;
use optimark_models::{CreateCourseDto, UpdateCourseDto};
use sqlx::PgPool;

use crate::modules::courses::service::CourseService;
use crate::output::{Table, render_record};

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// Create a new course
    Create {
        /// Unique course code, e.g. CS101
        code: String,
        /// Course name
        name: String,
    },
    /// Show a course
    Get { code: String },
    /// List all courses
    List,
    /// Update course fields
    Update {
        code: String,
        /// Change the course code
        #[arg(long = "new-code", alias = "new_code")]
        new_code: Option<String>,
        /// Change the course name
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a course and its offerings
    Delete { code: String },
}

pub async fn run(db: &PgPool, command: CourseCommand) -> Result<(), AppError> {
    match command {
        CourseCommand::Create { code, name } => {
            let course = CourseService::create_course(db, CreateCourseDto { code, name }).await?;
            println!("Course {}-{} created.", course.code, course.name);
        }
        CourseCommand::Get { code } => {
            let course = CourseService::get_course(db, &code).await?;
            println!(
                "{}",
                render_record(&[("CODE", course.code), ("NAME", course.name)])
            );
        }
        CourseCommand::List => {
            let courses = CourseService::list_courses(db).await?;
            if courses.is_empty() {
                println!("No courses found.");
                return Ok(());
            }

            let mut table = Table::new(&["CODE", "NAME"]);
            for c in courses {
                table.push_row([c.code, c.name]);
            }
            println!("{}", table.render());
        }
        CourseCommand::Update {
            code,
            new_code,
            name,
        } => {
            let course =
                CourseService::update_course(db, &code, UpdateCourseDto { new_code, name }).await?;
            println!("Course {} updated: {}-{}", code, course.code, course.name);
        }
        CourseCommand::Delete { code } => {
            CourseService::delete_course(db, &code).await?;
            println!("Course {} deleted.", code);
        }
    }
    Ok(())
}
