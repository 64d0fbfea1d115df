use clap::Subcommand;
use dialoguer::Password;
use optimark_core::AppError;
use optimark_models::{CreateMemberDto, Member, Roster, UpdateMemberDto, UserId};
use sqlx::PgPool;

use crate::modules::members::service::MemberService;
use crate::output::{Table, optional, render_record, timestamp};

/// Subcommands shared by the `staff` and `student` groups.
#[derive(Debug, Subcommand)]
pub enum MemberCommand {
    /// Register a member and print the generated ID
    Create {
        /// Display name, also used to derive the ID
        username: String,
        /// Plain-text password; prompted for when omitted
        password: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Show a member
    Get { id: UserId },
    /// List members
    List,
    /// Update member fields
    Update {
        id: UserId,
        #[arg(long)]
        name: Option<String>,
        /// New email; pass an empty string to clear it
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a member
    Delete { id: UserId },
}

pub async fn run(db: &PgPool, roster: Roster, command: MemberCommand) -> Result<(), AppError> {
    let label = roster.label();

    match command {
        MemberCommand::Create {
            username,
            password,
            email,
        } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password()?,
            };

            let member = MemberService::create_member(
                db,
                roster,
                CreateMemberDto {
                    name: username,
                    password,
                    email,
                },
            )
            .await?;
            println!("{} {} created with ID {}", label, member.name, member.id);
        }
        MemberCommand::Get { id } => {
            let member = MemberService::get_member(db, roster, &id).await?;
            println!("{}", render_member(&member));
        }
        MemberCommand::List => {
            let members = MemberService::list_members(db, roster).await?;
            if members.is_empty() {
                println!("No {} found.", roster.table());
                return Ok(());
            }

            let mut table = Table::new(&["ID", "NAME", "EMAIL", "ENROLLED_AT"]);
            for m in &members {
                table.push_row([
                    m.id.to_string(),
                    m.name.clone(),
                    optional(m.email.as_deref()),
                    timestamp(&m.enrolled_at),
                ]);
            }
            println!("{}", table.render());
        }
        MemberCommand::Update {
            id,
            name,
            email,
            password,
        } => {
            let member = MemberService::update_member(
                db,
                roster,
                &id,
                UpdateMemberDto {
                    name,
                    email,
                    password,
                },
            )
            .await?;
            println!("{} {} updated.", label, member.id);
        }
        MemberCommand::Delete { id } => {
            MemberService::delete_member(db, roster, &id).await?;
            println!("{} {} deleted.", label, id);
        }
    }
    Ok(())
}

/// Reads a password from the terminal without echoing it.
pub(crate) fn prompt_password() -> Result<String, AppError> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords don't match")
        .interact()?;
    Ok(password)
}

fn render_member(member: &Member) -> String {
    render_record(&[
        ("ID", member.id.to_string()),
        ("NAME", member.name.clone()),
        ("EMAIL", optional(member.email.as_deref())),
        ("ENROLLED_AT", timestamp(&member.enrolled_at)),
        ("UPDATED_AT", timestamp(&member.updated_at)),
    ])
}
