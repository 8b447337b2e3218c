//! Schema and unit-of-work tests against an in-memory database.

use chassis::db::migrator::Migrator;
use chassis::db::{NewUser, Store};
use chassis::entities::user;
use sea_orm::{ActiveModelTrait, Set};
use sea_orm_migration::MigratorTrait;

async fn migrated_store() -> Store {
    // A single-connection pool keeps every query on the same in-memory db.
    let store = Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("failed to open in-memory store");

    Migrator::up(&store.conn, None)
        .await
        .expect("failed to apply migrations");

    store
}

fn sample_user(email: &str) -> NewUser {
    NewUser {
        name: "Ada".to_string(),
        email: email.to_string(),
        hashed_password: "$argon2id$dummy".to_string(),
    }
}

#[tokio::test]
async fn insert_assigns_id_and_defaults_active() {
    let store = migrated_store().await;

    let created = store
        .users()
        .create(sample_user("ada@example.com"))
        .await
        .expect("insert failed");

    assert!(created.id >= 1);
    assert!(created.is_active);
    assert_eq!(created.email, "ada@example.com");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let store = migrated_store().await;

    store
        .users()
        .create(sample_user("dup@example.com"))
        .await
        .expect("first insert failed");

    let mut second = sample_user("dup@example.com");
    second.name = "Grace".to_string();

    let err = store.users().create(second).await;
    assert!(err.is_err(), "second insert with same email must fail");
}

#[tokio::test]
async fn same_name_different_email_is_fine() {
    let store = migrated_store().await;

    store
        .users()
        .create(sample_user("one@example.com"))
        .await
        .expect("first insert failed");
    store
        .users()
        .create(sample_user("two@example.com"))
        .await
        .expect("name is indexed but not unique");
}

#[tokio::test]
async fn lookup_and_list() {
    let store = migrated_store().await;
    let users = store.users();

    let created = users
        .create(sample_user("ada@example.com"))
        .await
        .expect("insert failed");

    let by_id = users.get(created.id).await.expect("get failed");
    assert_eq!(by_id.as_ref().map(|u| u.email.as_str()), Some("ada@example.com"));

    let by_email = users
        .get_by_email("ada@example.com")
        .await
        .expect("get_by_email failed");
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    assert!(users.get_by_email("nobody@example.com").await.unwrap().is_none());
    assert_eq!(users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn set_active_flips_flag() {
    let store = migrated_store().await;
    let users = store.users();

    let created = users
        .create(sample_user("ada@example.com"))
        .await
        .expect("insert failed");

    assert!(users.set_active(created.id, false).await.unwrap());
    let reloaded = users.get(created.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);

    assert!(!users.set_active(9999, false).await.unwrap());
}

#[tokio::test]
async fn dropped_transaction_rolls_back() {
    let store = migrated_store().await;

    {
        let txn = store.begin().await.expect("begin failed");

        user::ActiveModel {
            name: Set("Ada".to_string()),
            email: Set("uncommitted@example.com".to_string()),
            hashed_password: Set("$argon2id$dummy".to_string()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .expect("insert inside transaction failed");

        // No commit: dropping the transaction must roll the insert back.
    }

    let found = store
        .users()
        .get_by_email("uncommitted@example.com")
        .await
        .unwrap();
    assert!(found.is_none());
}
