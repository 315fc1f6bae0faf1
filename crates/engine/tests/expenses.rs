use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, Expense, ExpenseDraft, ExpensePatch, ExpenseQuery, UserDraft};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn new_user(engine: &Engine, name: &str) -> Uuid {
    engine
        .create_user(UserDraft {
            name: name.to_string(),
            email: None,
        })
        .await
        .unwrap()
        .id
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn draft(user_id: Uuid, spent_at: DateTime<Utc>, title: &str, category: &str) -> ExpenseDraft {
    ExpenseDraft {
        spent_at: Some(spent_at),
        title: Some(title.to_string()),
        amount: Some(10.0),
        category: Some(category.to_string()),
        note: None,
        user_id: Some(user_id),
    }
}

fn titles(mut expenses: Vec<Expense>) -> Vec<String> {
    expenses.sort_by(|a, b| a.spent_at.cmp(&b.spent_at));
    expenses.into_iter().map(|e| e.title).collect()
}

/// One expense per interesting instant around January 2024.
async fn seed_january(engine: &Engine, user_id: Uuid) {
    let rows = [
        (Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(), "before"),
        (at(2024, 1, 1, 0), "first-day"),
        (at(2024, 1, 15, 12), "middle"),
        (Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap(), "last-day"),
        (at(2024, 2, 1, 0), "after"),
    ];
    for (spent_at, title) in rows {
        engine
            .create_expense(draft(user_id, spent_at, title, "misc"))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn create_returns_the_stored_fields() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;

    let spent_at = Utc.with_ymd_and_hms(2024, 3, 2, 18, 30, 15).unwrap();
    let created = engine
        .create_expense(ExpenseDraft {
            spent_at: Some(spent_at),
            title: Some("Dinner".to_string()),
            amount: Some(42.75),
            category: Some("food".to_string()),
            note: Some("birthday".to_string()),
            user_id: Some(user_id),
        })
        .await
        .unwrap();

    assert_eq!(created.spent_at, spent_at);
    assert_eq!(created.title, "Dinner");
    assert_eq!(created.amount, 42.75);
    assert_eq!(created.category, "food");
    assert_eq!(created.note.as_deref(), Some("birthday"));
    assert_eq!(created.user_id, user_id);

    let fetched = engine.expense(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_requires_every_mandatory_field() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    let base = draft(user_id, at(2024, 1, 1, 9), "Taxi", "transport");

    let mut missing = base.clone();
    missing.spent_at = None;
    assert_eq!(
        engine.create_expense(missing).await.unwrap_err(),
        EngineError::MissingField("spentAt".to_string())
    );

    let mut missing = base.clone();
    missing.title = None;
    assert_eq!(
        engine.create_expense(missing).await.unwrap_err(),
        EngineError::MissingField("title".to_string())
    );

    let mut missing = base.clone();
    missing.amount = None;
    assert_eq!(
        engine.create_expense(missing).await.unwrap_err(),
        EngineError::MissingField("amount".to_string())
    );

    let mut missing = base.clone();
    missing.category = None;
    assert_eq!(
        engine.create_expense(missing).await.unwrap_err(),
        EngineError::MissingField("category".to_string())
    );

    let mut missing = base;
    missing.user_id = None;
    assert_eq!(
        engine.create_expense(missing).await.unwrap_err(),
        EngineError::MissingField("userId".to_string())
    );

    assert!(
        engine
            .list_expenses(&ExpenseQuery::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn create_rejects_unknown_user() {
    let (engine, _db) = engine_with_db().await;
    new_user(&engine, "alice").await;

    let err = engine
        .create_expense(draft(Uuid::new_v4(), at(2024, 1, 1, 9), "Taxi", "transport"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ReferenceNotFound(_)), "{err:?}");
}

#[tokio::test]
async fn list_without_filters_returns_everything_once() {
    let (engine, _db) = engine_with_db().await;
    let alice = new_user(&engine, "alice").await;
    let bob = new_user(&engine, "bob").await;
    seed_january(&engine, alice).await;
    engine
        .create_expense(draft(bob, at(2024, 1, 10, 8), "bob-coffee", "food"))
        .await
        .unwrap();

    let all = engine.list_expenses(&ExpenseQuery::default()).await.unwrap();
    let mut ids: Vec<Uuid> = all.iter().map(|e| e.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(all.len(), 6);
    assert_eq!(ids.len(), 6);
}

#[tokio::test]
async fn list_by_inclusive_date_range() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    seed_january(&engine, user_id).await;

    let january = engine
        .list_expenses(&ExpenseQuery {
            from: Some("2024-01-01".to_string()),
            to: Some("2024-01-31".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(january), ["first-day", "middle", "last-day"]);
}

#[tokio::test]
async fn list_with_a_single_bound() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    seed_january(&engine, user_id).await;

    let since = engine
        .list_expenses(&ExpenseQuery {
            from: Some("2024-01-15T12:00:00Z".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(since), ["middle", "last-day", "after"]);

    let until = engine
        .list_expenses(&ExpenseQuery {
            to: Some("2024-01-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(until), ["before", "first-day"]);
}

#[tokio::test]
async fn list_by_user_and_category() {
    let (engine, _db) = engine_with_db().await;
    let alice = new_user(&engine, "alice").await;
    let bob = new_user(&engine, "bob").await;

    engine
        .create_expense(draft(alice, at(2024, 1, 2, 8), "alice-food", "food"))
        .await
        .unwrap();
    engine
        .create_expense(draft(alice, at(2024, 1, 3, 8), "alice-rent", "rent"))
        .await
        .unwrap();
    engine
        .create_expense(draft(bob, at(2024, 1, 4, 8), "bob-food", "food"))
        .await
        .unwrap();

    let alice_only = engine
        .list_expenses(&ExpenseQuery {
            user_id: Some(alice.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(alice_only), ["alice-food", "alice-rent"]);

    let food = engine
        .list_expenses(&ExpenseQuery {
            categories: Some("food".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(food), ["alice-food", "bob-food"]);

    let alice_food = engine
        .list_expenses(&ExpenseQuery {
            user_id: Some(alice.to_string()),
            categories: Some("food".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(alice_food), ["alice-food"]);

    // Set-membership is not supported: a comma list is one literal category.
    let both = engine
        .list_expenses(&ExpenseQuery {
            categories: Some("food,rent".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(both.is_empty());
}

#[tokio::test]
async fn list_rejects_malformed_dates() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .list_expenses(&ExpenseQuery {
            from: Some("not-a-date".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidDate(_)), "{err:?}");
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let (engine, _db) = engine_with_db().await;
    let id = Uuid::new_v4();
    let not_found = EngineError::KeyNotFound("Expense".to_string());

    assert_eq!(engine.expense(id).await.unwrap_err(), not_found);
    assert_eq!(
        engine
            .update_expense(
                id,
                ExpensePatch {
                    title: Some("x".to_string()),
                    ..Default::default()
                }
            )
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(engine.delete_expense(id).await.unwrap_err(), not_found);
}

#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    let mut initial = draft(user_id, at(2024, 5, 1, 12), "Groceries", "food");
    initial.note = Some("weekly".to_string());
    let created = engine.create_expense(initial).await.unwrap();

    let updated = engine
        .update_expense(
            created.id,
            ExpensePatch {
                amount: Some(55.5),
                title: Some("Big groceries".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.amount, 55.5);
    assert_eq!(updated.title, "Big groceries");
    assert_eq!(updated.spent_at, created.spent_at);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.note, created.note);
    assert_eq!(updated.user_id, created.user_id);
    assert_eq!(engine.expense(created.id).await.unwrap(), updated);

    let unchanged = engine
        .update_expense(created.id, ExpensePatch::default())
        .await
        .unwrap();
    assert_eq!(unchanged, updated);
}

#[tokio::test]
async fn update_checks_new_owner() {
    let (engine, _db) = engine_with_db().await;
    let alice = new_user(&engine, "alice").await;
    let bob = new_user(&engine, "bob").await;
    let created = engine
        .create_expense(draft(alice, at(2024, 5, 1, 12), "Cinema", "fun"))
        .await
        .unwrap();

    let err = engine
        .update_expense(
            created.id,
            ExpensePatch {
                user_id: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ReferenceNotFound(_)), "{err:?}");

    let moved = engine
        .update_expense(
            created.id,
            ExpensePatch {
                user_id: Some(bob),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.user_id, bob);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    let created = engine
        .create_expense(draft(user_id, at(2024, 5, 1, 12), "Gym", "health"))
        .await
        .unwrap();

    engine.delete_expense(created.id).await.unwrap();

    assert_eq!(
        engine.expense(created.id).await.unwrap_err(),
        EngineError::KeyNotFound("Expense".to_string())
    );
    assert!(
        engine
            .list_expenses(&ExpenseQuery::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn inverted_range_matches_nothing() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    seed_january(&engine, user_id).await;

    let none = engine
        .list_expenses(&ExpenseQuery {
            from: Some("2024-02-01".to_string()),
            to: Some("2024-01-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn category_filter_keeps_surrounding_spaces() {
    let (engine, _db) = engine_with_db().await;
    let user_id = new_user(&engine, "alice").await;
    engine
        .create_expense(draft(user_id, at(2024, 1, 2, 8), "padded", "food "))
        .await
        .unwrap();
    engine
        .create_expense(draft(user_id, at(2024, 1, 3, 8), "plain", "food"))
        .await
        .unwrap();

    let padded = engine
        .list_expenses(&ExpenseQuery {
            categories: Some("food ".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(padded), ["padded"]);

    let plain = engine
        .list_expenses(&ExpenseQuery {
            categories: Some("food".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(plain), ["plain"]);
}
