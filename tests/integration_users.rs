mod common;

use common::setup_schema;
use optimark::modules::tasks::service::TaskService;
use optimark::modules::users::service::UserService;
use optimark_core::ErrorKind;
use optimark_models::{CreateTaskDto, CreateUserDto, TaskId, TaskStatus, UpdateUserDto, UserType};
use sqlx::PgPool;

fn user(name: &str, user_type: UserType) -> CreateUserDto {
    CreateUserDto {
        name: name.into(),
        user_type,
        password: "secret123".into(),
    }
}

#[sqlx::test(migrations = false)]
async fn test_user_type_selects_prefix(pool: PgPool) {
    setup_schema(&pool).await;

    let student = UserService::create_user(&pool, user("alice", UserType::Student))
        .await
        .unwrap();
    let teacher = UserService::create_user(&pool, user("bob", UserType::Teacher))
        .await
        .unwrap();

    assert_eq!(student.user_type, UserType::Student);
    assert!("ABEH".contains(&student.id.as_str()[..1]));
    assert_eq!(teacher.user_type, UserType::Teacher);
    assert!("SPM".contains(&teacher.id.as_str()[..1]));
}

#[sqlx::test(migrations = false)]
async fn test_update_and_delete_user(pool: PgPool) {
    setup_schema(&pool).await;

    let created = UserService::create_user(&pool, user("carol", UserType::Student))
        .await
        .unwrap();

    let updated = UserService::update_user(
        &pool,
        &created.id,
        UpdateUserDto {
            user_type: Some(UserType::Teacher),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.user_type, UserType::Teacher);
    assert_eq!(updated.id, created.id);

    assert_eq!(UserService::list_users(&pool).await.unwrap().len(), 1);

    UserService::delete_user(&pool, &created.id).await.unwrap();
    let err = UserService::get_user(&pool, &created.id).await.unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[sqlx::test(migrations = false)]
async fn test_task_lifecycle(pool: PgPool) {
    setup_schema(&pool).await;

    let owner = UserService::create_user(&pool, user("dana", UserType::Teacher))
        .await
        .unwrap();

    let task = TaskService::create_task(
        &pool,
        CreateTaskDto {
            user_id: owner.id.clone(),
            name: "grade exams".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.id.as_str().len(), TaskId::LEN);
    assert_eq!(task.user_id, owner.id);

    let done = TaskService::update_task_status(&pool, &task.id, TaskStatus::Done)
        .await
        .unwrap();
    assert_eq!(done.status, TaskStatus::Done);
    assert!(done.updated_at >= task.updated_at);

    let fetched = TaskService::get_task(&pool, &task.id).await.unwrap();
    assert_eq!(fetched.status, TaskStatus::Done);
    assert_eq!(TaskService::list_tasks(&pool).await.unwrap().len(), 1);

    TaskService::delete_task(&pool, &task.id).await.unwrap();
    let err = TaskService::delete_task(&pool, &task.id).await.unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[sqlx::test(migrations = false)]
async fn test_missing_task(pool: PgPool) {
    setup_schema(&pool).await;

    let err = TaskService::update_task_status(&pool, &TaskId::from("deadbeef"), TaskStatus::Failed)
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
    assert_eq!(err.to_string(), "No task found with ID deadbeef");
}
