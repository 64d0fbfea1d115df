mod common;

use common::setup_schema;
use optimark::modules::courses::service::CourseService;
use optimark::modules::semesters::service::SemesterService;
use optimark_core::ErrorKind;
use optimark_models::{CreateCourseDto, SemesterId, UpdateCourseDto};
use sqlx::PgPool;

fn course(code: &str, name: &str) -> CreateCourseDto {
    CreateCourseDto {
        code: code.into(),
        name: name.into(),
    }
}

#[sqlx::test(migrations = false)]
async fn test_course_crud(pool: PgPool) {
    setup_schema(&pool).await;

    CourseService::create_course(&pool, course("MA201", "Calculus"))
        .await
        .unwrap();
    CourseService::create_course(&pool, course("CS101", "Intro"))
        .await
        .unwrap();

    let courses = CourseService::list_courses(&pool).await.unwrap();
    let codes: Vec<_> = courses.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["CS101", "MA201"]);

    let updated = CourseService::update_course(
        &pool,
        "CS101",
        UpdateCourseDto {
            new_code: None,
            name: Some("Programming I".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.code, "CS101");
    assert_eq!(updated.name, "Programming I");

    CourseService::delete_course(&pool, "CS101").await.unwrap();
    let err = CourseService::get_course(&pool, "CS101").await.unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_course(pool: PgPool) {
    setup_schema(&pool).await;

    CourseService::create_course(&pool, course("CS101", "Intro"))
        .await
        .unwrap();
    let err = CourseService::create_course(&pool, course("CS101", "Again"))
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::AlreadyExists));
    assert_eq!(err.to_string(), "Course CS101 already exists.");
}

#[sqlx::test(migrations = false)]
async fn test_recode_onto_existing_course(pool: PgPool) {
    setup_schema(&pool).await;

    CourseService::create_course(&pool, course("CS101", "Intro"))
        .await
        .unwrap();
    CourseService::create_course(&pool, course("CS102", "Data"))
        .await
        .unwrap();

    let err = CourseService::update_course(
        &pool,
        "CS101",
        UpdateCourseDto {
            new_code: Some("CS102".into()),
            name: None,
        },
    )
    .await
    .unwrap_err();
    assert!(err.is(ErrorKind::AlreadyExists));
}

#[sqlx::test(migrations = false)]
async fn test_update_missing_course(pool: PgPool) {
    setup_schema(&pool).await;

    let err = CourseService::update_course(
        &pool,
        "XX000",
        UpdateCourseDto {
            new_code: None,
            name: Some("Ghost".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[sqlx::test(migrations = false)]
async fn test_semester_create_and_duplicate(pool: PgPool) {
    setup_schema(&pool).await;

    let date = chrono::NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
    let semester = SemesterService::create_semester(&pool, date).await.unwrap();
    assert_eq!(semester.id.as_str(), "2425S1");

    let err = SemesterService::create_semester(&pool, date).await.unwrap_err();
    assert!(err.is(ErrorKind::AlreadyExists));

    let listed = SemesterService::list_semesters(&pool).await.unwrap();
    assert_eq!(listed, vec![semester]);

    let err = SemesterService::delete_semester(&pool, &SemesterId::from("9900S1"))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}
