//! Update commands with no field option fail before touching the database,
//! so a pool pointed at a closed port is enough here.

use clap::Parser;
use optimark::cli::{Cli, dispatch};
use optimark::modules::courses::service::CourseService;
use optimark::modules::members::service::MemberService;
use optimark::modules::offers::service::OfferService;
use optimark::modules::users::service::UserService;
use optimark_config::{DatabaseConfig, SchemaConfig};
use optimark_core::ErrorKind;
use optimark_db::init_db_pool;
use optimark_models::{
    Roster, SemesterId, UpdateCourseDto, UpdateMemberDto, UpdateOfferDto, UpdateUserDto, UserId,
};
use sqlx::PgPool;

fn unconnected_pool() -> PgPool {
    let config = DatabaseConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..DatabaseConfig::default()
    };
    init_db_pool(&config)
}

#[tokio::test]
async fn test_offer_update_without_options() {
    let pool = unconnected_pool();
    let err = OfferService::update_offer(
        &pool,
        "CS101",
        &SemesterId::from("2425S1"),
        UpdateOfferDto::default(),
    )
    .await
    .unwrap_err();

    assert!(err.is(ErrorKind::NothingToUpdate));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.to_string(), "Nothing to update. Use --date/--name/--new-code.");
}

#[tokio::test]
async fn test_member_update_without_options() {
    let pool = unconnected_pool();

    for roster in [Roster::Staff, Roster::Students] {
        let err = MemberService::update_member(
            &pool,
            roster,
            &UserId::from("B970736R"),
            UpdateMemberDto::default(),
        )
        .await
        .unwrap_err();

        assert!(err.is(ErrorKind::NothingToUpdate));
        assert_eq!(err.to_string(), "Nothing to update. Use --name/--email/--password.");
    }
}

#[tokio::test]
async fn test_course_update_without_options() {
    let pool = unconnected_pool();
    let err = CourseService::update_course(&pool, "CS101", UpdateCourseDto::default())
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::NothingToUpdate));
}

#[tokio::test]
async fn test_user_update_without_options() {
    let pool = unconnected_pool();
    let err = UserService::update_user(&pool, &UserId::from("P970736R"), UpdateUserDto::default())
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::NothingToUpdate));
}

#[tokio::test]
async fn test_update_commands_exit_with_usage_code() {
    let pool = unconnected_pool();
    let schema = SchemaConfig::default();

    for argv in [
        &["optimark", "course", "update", "CS101"][..],
        &["optimark", "offer", "update", "CS101", "2425S1"][..],
        &["optimark", "staff", "update", "P970736R"][..],
        &["optimark", "student", "update", "B970736R"][..],
        &["optimark", "user", "update", "B970736R"][..],
    ] {
        let cli = Cli::try_parse_from(argv).unwrap();
        let err = dispatch(&pool, &schema, cli.command).await.unwrap_err();

        assert!(err.is(ErrorKind::NothingToUpdate), "{:?}: {}", argv, err);
        assert_eq!(err.exit_code(), 2);
    }

    pool.close().await;
}
