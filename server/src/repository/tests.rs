//! Repository Integration Tests
//!
//! Tests for UserRepository and TodoRepository with in-memory SQLite.

use crate::domain::{Todo, User};
use crate::repository::{init_db_in_memory, Repository, TodoRepository, UserRepository};

fn setup_repos() -> (UserRepository, TodoRepository) {
    let db = init_db_in_memory().expect("Failed to init test DB");
    (UserRepository::new(db.clone()), TodoRepository::new(db))
}

async fn create_user(repo: &UserRepository, username: &str) -> User {
    let mut user = User::new(username.to_string(), format!("{}@example.com", username));
    user.set_password("password123").unwrap();
    repo.create(&user).await.expect("Failed to create user")
}

#[tokio::test]
async fn test_create_user_assigns_id() {
    let (users, _) = setup_repos();

    let created = create_user(&users, "alice").await;
    assert!(created.id > 0);
    assert_eq!(created.username, "alice");
}

#[tokio::test]
async fn test_find_user_by_username_and_email() {
    let (users, _) = setup_repos();
    create_user(&users, "bob").await;

    let by_name = users.find_by_username("bob").await.unwrap();
    assert!(by_name.is_some());

    let by_email = users.find_by_email("bob@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().username, "bob");

    let missing = users.find_by_username("nobody").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let (users, _) = setup_repos();
    create_user(&users, "carol").await;

    let mut dup = User::new("carol".to_string(), "other@example.com".to_string());
    dup.set_password("pw").unwrap();
    assert!(users.create(&dup).await.is_err());
}

#[tokio::test]
async fn test_create_and_find_todo() {
    let (users, todos) = setup_repos();
    let user = create_user(&users, "dave").await;

    let todo = Todo::new("Buy milk".to_string(), Some("2 liters".to_string()), None, user.id);
    let created = todos.create(&todo).await.expect("Failed to create");
    assert!(created.id > 0);

    let found = todos.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Buy milk");
    assert_eq!(found.description.as_deref(), Some("2 liters"));
    assert!(!found.completed);
}

#[tokio::test]
async fn test_list_by_user_is_scoped() {
    let (users, todos) = setup_repos();
    let a = create_user(&users, "erin").await;
    let b = create_user(&users, "frank").await;

    todos.create(&Todo::new("mine".to_string(), None, None, a.id)).await.unwrap();
    todos.create(&Todo::new("theirs".to_string(), None, None, b.id)).await.unwrap();

    let listed = todos.list_by_user(a.id, None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "mine");
}

#[tokio::test]
async fn test_list_by_user_completed_filter() {
    let (users, todos) = setup_repos();
    let user = create_user(&users, "grace").await;

    let open = todos.create(&Todo::new("open".to_string(), None, None, user.id)).await.unwrap();
    let mut done = todos.create(&Todo::new("done".to_string(), None, None, user.id)).await.unwrap();
    done.completed = true;
    todos.update(&done).await.unwrap();

    let completed = todos.list_by_user(user.id, Some(true)).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "done");

    let active = todos.list_by_user(user.id, Some(false)).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, open.id);
}

#[tokio::test]
async fn test_find_for_user_hides_foreign_todos() {
    let (users, todos) = setup_repos();
    let a = create_user(&users, "heidi").await;
    let b = create_user(&users, "ivan").await;

    let created = todos.create(&Todo::new("secret".to_string(), None, None, a.id)).await.unwrap();

    assert!(todos.find_for_user(created.id, a.id).await.unwrap().is_some());
    assert!(todos.find_for_user(created.id, b.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_todo() {
    let (users, todos) = setup_repos();
    let user = create_user(&users, "judy").await;

    let mut created = todos.create(&Todo::new("Original".to_string(), None, None, user.id)).await.unwrap();
    created.title = "Updated".to_string();
    created.completed = true;

    let updated = todos.update(&created).await.expect("Update failed");
    assert_eq!(updated.title, "Updated");

    let found = todos.find_by_id(created.id).await.unwrap().unwrap();
    assert!(found.completed);
}

#[tokio::test]
async fn test_delete_todo() {
    let (users, todos) = setup_repos();
    let user = create_user(&users, "mallory").await;

    let created = todos.create(&Todo::new("To delete".to_string(), None, None, user.id)).await.unwrap();
    todos.delete(created.id).await.expect("Delete failed");

    assert!(todos.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_user_cascades_to_todos() {
    let (users, todos) = setup_repos();
    let user = create_user(&users, "oscar").await;

    let created = todos.create(&Todo::new("orphan".to_string(), None, None, user.id)).await.unwrap();
    users.delete(user.id).await.expect("Delete user failed");

    assert!(todos.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_due_date_persists() {
    let (users, todos) = setup_repos();
    let user = create_user(&users, "peggy").await;

    let due = chrono::NaiveDate::from_ymd_opt(2026, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let created = todos
        .create(&Todo::new("due".to_string(), None, Some(due), user.id))
        .await
        .unwrap();

    let found = todos.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.due_date, Some(due));
}
