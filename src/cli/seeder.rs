//! Fake data for local development.

use fake::Fake;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::Name;
use optimark_core::{AppError, ErrorKind};
use optimark_models::{CreateMemberDto, Roster};
use sqlx::PgPool;
use std::time::Instant;
use tracing::warn;

use crate::modules::members::service::MemberService;

pub struct SeedCounts {
    pub students: usize,
    pub staff: usize,
}

/// Generates one fake member.
pub fn fake_member() -> CreateMemberDto {
    CreateMemberDto {
        name: Name().fake(),
        password: Password(8..16).fake(),
        email: Some(SafeEmail().fake()),
    }
}

/// Inserts fake students and staff members.
///
/// Members are created one at a time through the regular create path, so
/// they get generated IDs and hashed passwords like any other member. A
/// generated ID or email that collides with an existing row is skipped.
pub async fn seed_database(db: &PgPool, counts: SeedCounts) -> Result<(), AppError> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Students: {}", counts.students);
    println!("   - Staff: {}", counts.staff);

    for (roster, count) in [
        (Roster::Students, counts.students),
        (Roster::Staff, counts.staff),
    ] {
        let step_start = Instant::now();
        let created = seed_roster(db, roster, count).await?;
        println!(
            "   ✓ Created {} {} in {:?}",
            created,
            roster.table(),
            step_start.elapsed()
        );
    }

    println!("\n✅ Seeding completed in {:?}", start_time.elapsed());
    Ok(())
}

async fn seed_roster(db: &PgPool, roster: Roster, count: usize) -> Result<usize, AppError> {
    let mut created = 0;

    for _ in 0..count {
        match MemberService::create_member(db, roster, fake_member()).await {
            Ok(_) => created += 1,
            Err(e) if e.is(ErrorKind::AlreadyExists) => {
                warn!(table = roster.table(), error = %e, "Skipping duplicate seed row");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_fake_member_is_valid() {
        for _ in 0..10 {
            let member = fake_member();
            assert!(member.validate().is_ok());
            assert!(member.email.as_deref().is_some_and(|e| e.contains('@')));
        }
    }
}
