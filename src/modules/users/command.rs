use clap::Subcommand;
use optimark_core::AppError;
use optimark_models::{CreateUserDto, UpdateUserDto, UserId, UserType};
use sqlx::PgPool;

use crate::modules::members::command::prompt_password;
use crate::modules::users::service::UserService;
use crate::output::{Table, optional, render_record, timestamp};

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user and print the generated ID
    Create {
        name: String,
        /// student or teacher
        user_type: UserType,
        /// Plain-text password; prompted for when omitted
        password: Option<String>,
    },
    /// Show a user
    Get { id: UserId },
    /// List users
    List,
    /// Update a user's password or type
    Update {
        id: UserId,
        #[arg(long)]
        password: Option<String>,
        #[arg(long = "user-type", alias = "user_type")]
        user_type: Option<UserType>,
    },
    /// Delete a user
    Delete { id: UserId },
}

pub async fn run(db: &PgPool, command: UserCommand) -> Result<(), AppError> {
    match command {
        UserCommand::Create {
            name,
            user_type,
            password,
        } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };

            let user = UserService::create_user(
                db,
                CreateUserDto {
                    name,
                    user_type,
                    password,
                },
            )
            .await?;
            println!("User {} ({}) created with ID {}", user.name, user.user_type, user.id);
        }
        UserCommand::Get { id } => {
            let user = UserService::get_user(db, &id).await?;
            println!(
                "{}",
                render_record(&[
                    ("ID", user.id.to_string()),
                    ("NAME", user.name),
                    ("USER_TYPE", user.user_type.to_string()),
                    ("EMAIL", optional(user.email.as_deref())),
                    ("CREATED_AT", timestamp(&user.created_at)),
                    ("UPDATED_AT", timestamp(&user.updated_at)),
                ])
            );
        }
        UserCommand::List => {
            let users = UserService::list_users(db).await?;
            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "NAME", "USER_TYPE", "CREATED_AT"]);
            for u in users {
                table.push_row([
                    u.id.to_string(),
                    u.name,
                    u.user_type.to_string(),
                    timestamp(&u.created_at),
                ]);
            }
            println!("{}", table.render());
        }
        UserCommand::Update {
            id,
            password,
            user_type,
        } => {
            let user =
                UserService::update_user(db, &id, UpdateUserDto { password, user_type }).await?;
            println!("User {} updated ({}).", user.id, user.user_type);
        }
        UserCommand::Delete { id } => {
            UserService::delete_user(db, &id).await?;
            println!("User {} deleted.", id);
        }
    }
    Ok(())
}
