mod common;

use common::setup_schema;
use optimark::modules::members::service::MemberService;
use optimark_core::{ErrorKind, hash_password};
use optimark_models::{CreateMemberDto, Roster, UpdateMemberDto, UserId};
use sqlx::PgPool;

fn member(name: &str, email: Option<&str>) -> CreateMemberDto {
    CreateMemberDto {
        name: name.into(),
        password: "secret123".into(),
        email: email.map(String::from),
    }
}

async fn stored_password(pool: &PgPool, roster: Roster, id: &UserId) -> String {
    sqlx::query_scalar::<_, String>(&format!(
        "SELECT password FROM {} WHERE id = $1",
        roster.table()
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = false)]
async fn test_create_student_and_staff(pool: PgPool) {
    setup_schema(&pool).await;

    let student = MemberService::create_member(&pool, Roster::Students, member("alice", None))
        .await
        .unwrap();
    assert!(['A', 'B', 'E', 'H'].contains(&student.id.as_str().chars().next().unwrap()));
    assert_eq!(
        stored_password(&pool, Roster::Students, &student.id).await,
        hash_password("secret123")
    );

    let staff = MemberService::create_member(
        &pool,
        Roster::Staff,
        member("bob", Some("bob@example.com")),
    )
    .await
    .unwrap();
    assert!(['S', 'P', 'M'].contains(&staff.id.as_str().chars().next().unwrap()));
    assert_eq!(staff.email.as_deref(), Some("bob@example.com"));

    // Tables are separate.
    let err = MemberService::get_member(&pool, Roster::Staff, &student.id)
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_email(pool: PgPool) {
    setup_schema(&pool).await;

    MemberService::create_member(&pool, Roster::Students, member("alice", Some("a@example.com")))
        .await
        .unwrap();
    let err = MemberService::create_member(
        &pool,
        Roster::Students,
        member("alicia", Some("a@example.com")),
    )
    .await
    .unwrap_err();

    assert!(err.is(ErrorKind::AlreadyExists));
    assert_eq!(err.to_string(), "Student with email a@example.com already exists.");
}

#[sqlx::test(migrations = false)]
async fn test_update_member_fields(pool: PgPool) {
    setup_schema(&pool).await;

    let created =
        MemberService::create_member(&pool, Roster::Staff, member("carol", Some("c@example.com")))
            .await
            .unwrap();

    let updated = MemberService::update_member(
        &pool,
        Roster::Staff,
        &created.id,
        UpdateMemberDto {
            name: Some("Carol King".into()),
            password: Some("newpass".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Carol King");
    assert_eq!(updated.email.as_deref(), Some("c@example.com"));
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(
        stored_password(&pool, Roster::Staff, &created.id).await,
        hash_password("newpass")
    );

    let cleared = MemberService::update_member(
        &pool,
        Roster::Staff,
        &created.id,
        UpdateMemberDto {
            email: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(cleared.email, None);
}

#[sqlx::test(migrations = false)]
async fn test_missing_member(pool: PgPool) {
    setup_schema(&pool).await;

    let id = UserId::from("B000000C");

    let err = MemberService::update_member(
        &pool,
        Roster::Students,
        &id,
        UpdateMemberDto {
            name: Some("Nobody".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));

    let err = MemberService::delete_member(&pool, Roster::Students, &id)
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[sqlx::test(migrations = false)]
async fn test_list_and_delete_members(pool: PgPool) {
    setup_schema(&pool).await;

    let first = MemberService::create_member(&pool, Roster::Students, member("dana", None))
        .await
        .unwrap();
    MemberService::create_member(&pool, Roster::Students, member("erin", None))
        .await
        .unwrap();

    assert_eq!(
        MemberService::list_members(&pool, Roster::Students)
            .await
            .unwrap()
            .len(),
        2
    );
    assert!(
        MemberService::list_members(&pool, Roster::Staff)
            .await
            .unwrap()
            .is_empty()
    );

    MemberService::delete_member(&pool, Roster::Students, &first.id)
        .await
        .unwrap();
    assert_eq!(
        MemberService::list_members(&pool, Roster::Students)
            .await
            .unwrap()
            .len(),
        1
    );
}
