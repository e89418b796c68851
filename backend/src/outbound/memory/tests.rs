//! Behavioural coverage for the in-memory directory.

use std::collections::HashSet;
use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;

fn draft(id: Option<i64>, name: &str, email: &str, age: i64) -> UserDraft {
    UserDraft::new(id.map(UserId::new), name, email, age)
}

fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|user| user.id().get()).collect()
}

#[fixture]
fn directory() -> InMemoryUserDirectory {
    InMemoryUserDirectory::seeded().expect("seed users are valid")
}

#[rstest]
#[tokio::test]
async fn seeded_directory_lists_alice_then_bob(directory: InMemoryUserDirectory) {
    let users = directory.list().await;
    assert_eq!(ids(&users), vec![1, 2]);
    assert_eq!(users[0].name(), "Alice");
    assert_eq!(users[1].email(), "bob@example.com");
}

#[rstest]
#[tokio::test]
async fn get_returns_matching_record(directory: InMemoryUserDirectory) {
    let user = directory.get(UserId::new(1)).await.expect("alice exists");
    assert_eq!(user.name(), "Alice");
    assert_eq!(user.age(), 25);
}

#[rstest]
#[tokio::test]
async fn create_with_colliding_id_conflicts_without_mutation(directory: InMemoryUserDirectory) {
    let before = directory.list().await;

    let result = directory
        .create(draft(Some(1), "Mallory", "mallory@example.com", 40))
        .await;

    assert_eq!(result, Err(UserDirectoryError::conflict(UserId::new(1))));
    assert_eq!(directory.list().await, before);
}

#[rstest]
#[tokio::test]
async fn create_keeps_requested_free_id(directory: InMemoryUserDirectory) {
    let created = directory
        .create(draft(Some(3), "Carol", "carol@example.com", 22))
        .await
        .expect("id 3 is free");

    assert_eq!(created.id(), UserId::new(3));
    assert_eq!(ids(&directory.list().await), vec![1, 2, 3]);
}

#[rstest]
#[tokio::test]
async fn create_without_id_assigns_one_past_highest() {
    let directory = InMemoryUserDirectory::with_users(vec![
        User::new(UserId::new(7), "Grace", "grace@example.com", 45),
        User::new(UserId::new(2), "Bob", "bob@example.com", 30),
    ])
    .expect("unique ids");

    let created = directory
        .create(draft(None, "Dan", "dan@example.com", 19))
        .await
        .expect("assignment succeeds");

    assert_eq!(created.id(), UserId::new(8));
}

#[rstest]
#[tokio::test]
async fn create_without_id_starts_at_one_when_empty() {
    let directory = InMemoryUserDirectory::new();
    let created = directory
        .create(draft(None, "Ada", "ada@example.com", 36))
        .await
        .expect("assignment succeeds");
    assert_eq!(created.id(), UserId::new(1));
}

#[rstest]
#[tokio::test]
async fn create_without_id_reports_exhaustion() {
    let directory = InMemoryUserDirectory::with_users(vec![
        User::new(UserId::new(i64::MAX), "Max", "max@example.com", 99),
    ])
    .expect("unique ids");

    let result = directory.create(draft(None, "Ada", "ada@example.com", 36)).await;

    assert_eq!(result, Err(UserDirectoryError::IdsExhausted));
    assert_eq!(directory.list().await.len(), 1);
}

#[rstest]
#[tokio::test]
async fn update_keeps_original_id(directory: InMemoryUserDirectory) {
    let updated = directory
        .update(
            UserId::new(2),
            draft(Some(999), "Bobby", "bob2@example.com", 31),
        )
        .await
        .expect("bob exists");

    assert_eq!(updated.id(), UserId::new(2));
    assert_eq!(updated.name(), "Bobby");
    let stored = directory.get(UserId::new(2)).await.expect("bob still stored");
    assert_eq!(stored, updated);
    assert!(directory.get(UserId::new(999)).await.is_err());
    assert_eq!(directory.list().await.len(), 2);
}

#[rstest]
#[tokio::test]
async fn delete_removes_exactly_one_and_preserves_order() {
    let directory = InMemoryUserDirectory::seeded().expect("seed users are valid");
    directory
        .create(draft(Some(3), "Carol", "carol@example.com", 22))
        .await
        .expect("id 3 is free");
    let before = directory.list().await;

    let removed = directory.delete(UserId::new(2)).await.expect("bob exists");

    assert_eq!(removed.name(), "Bob");
    let after = directory.list().await;
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(ids(&after), vec![1, 3]);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Get,
    Update,
    Delete,
}

#[rstest]
#[case(Operation::Get)]
#[case(Operation::Update)]
#[case(Operation::Delete)]
#[tokio::test]
async fn absent_ids_fail_with_not_found_without_mutation(
    directory: InMemoryUserDirectory,
    #[case] operation: Operation,
) {
    let before = directory.list().await;
    let missing = UserId::new(3);

    let result = match operation {
        Operation::Get => directory.get(missing).await,
        Operation::Update => {
            directory
                .update(missing, draft(None, "Ghost", "ghost@example.com", 1))
                .await
        }
        Operation::Delete => directory.delete(missing).await,
    };

    assert_eq!(result, Err(UserDirectoryError::not_found(missing)), "{operation:?}");
    assert_eq!(directory.list().await, before, "{operation:?}");
}

#[rstest]
fn with_users_rejects_duplicate_ids() {
    let result = InMemoryUserDirectory::with_users(vec![
        User::new(UserId::new(1), "Alice", "alice@example.com", 25),
        User::new(UserId::new(1), "Alias", "alias@example.com", 26),
    ]);
    assert_eq!(result.err(), Some(SeedError::DuplicateId(UserId::new(1))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_never_share_an_id() {
    let directory = Arc::new(InMemoryUserDirectory::seeded().expect("seed users are valid"));

    let tasks: Vec<_> = (0..32_i64)
        .map(|n| {
            let directory = Arc::clone(&directory);
            tokio::spawn(async move {
                directory
                    .create(draft(None, "Worker", &format!("worker{n}@example.com"), n))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("task joins").expect("create succeeds");
    }

    let users = directory.list().await;
    let unique: HashSet<i64> = ids(&users).into_iter().collect();
    assert_eq!(users.len(), 34);
    assert_eq!(unique.len(), users.len());
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_same_id_admit_exactly_one() {
    let directory = Arc::new(InMemoryUserDirectory::new());

    let tasks: Vec<_> = (0..16_i64)
        .map(|n| {
            let directory = Arc::clone(&directory);
            tokio::spawn(async move {
                directory
                    .create(draft(Some(42), "Racer", &format!("racer{n}@example.com"), n))
                    .await
            })
        })
        .collect();
    let mut successes = 0;
    for task in tasks {
        if task.await.expect("task joins").is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(directory.list().await.len(), 1);
}
