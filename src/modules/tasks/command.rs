use clap::Subcommand;
use optimark_core::AppError;
use optimark_models::{CreateTaskDto, TaskId, TaskStatus, UserId};
use sqlx::PgPool;

use crate::modules::tasks::service::TaskService;
use crate::output::{Table, render_record, timestamp};

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Create a pending task for a user
    Create { user_id: UserId, name: String },
    /// Show a task
    Get { id: TaskId },
    /// List tasks, newest first
    List,
    /// Set a task's status
    Update {
        id: TaskId,
        /// pending, processing, done or failed
        status: TaskStatus,
    },
    /// Delete a task
    Delete { id: TaskId },
}

pub async fn run(db: &PgPool, command: TaskCommand) -> Result<(), AppError> {
    match command {
        TaskCommand::Create { user_id, name } => {
            let task = TaskService::create_task(db, CreateTaskDto { user_id, name }).await?;
            println!("Task {} created with ID {}", task.name, task.id);
        }
        TaskCommand::Get { id } => {
            let task = TaskService::get_task(db, &id).await?;
            println!(
                "{}",
                render_record(&[
                    ("ID", task.id.to_string()),
                    ("USER_ID", task.user_id.to_string()),
                    ("NAME", task.name),
                    ("STATUS", task.status.to_string()),
                    ("CREATED_AT", timestamp(&task.created_at)),
                    ("UPDATED_AT", timestamp(&task.updated_at)),
                ])
            );
        }
        TaskCommand::List => {
            let tasks = TaskService::list_tasks(db).await?;
            if tasks.is_empty() {
                println!("No tasks found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "USER_ID", "NAME", "STATUS", "UPDATED_AT"]);
            for t in tasks {
                table.push_row([
                    t.id.to_string(),
                    t.user_id.to_string(),
                    t.name,
                    t.status.to_string(),
                    timestamp(&t.updated_at),
                ]);
            }
            println!("{}", table.render());
        }
        TaskCommand::Update { id, status } => {
            let task = TaskService::update_task_status(db, &id, status).await?;
            println!("Task {} is now {}.", task.id, task.status);
        }
        TaskCommand::Delete { id } => {
            TaskService::delete_task(db, &id).await?;
            println!("Task {} deleted.", id);
        }
    }
    Ok(())
}
