use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, sea_query::Expr,
};
use tokio::task::JoinSet;

use wordbook_dictionary::domain::repository::{UserRepository, WordRecordRepository};
use wordbook_dictionary::domain::types::NewUser;
use wordbook_dictionary::error::DictionaryError;
use wordbook_dictionary_schema::word_records;
use wordbook_domain::history::HistoryLimit;
use wordbook_domain::language::Language;

use crate::helpers::{record_repo, seed_user, test_db, user_repo};

// ── Word records ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_insert_new_record_with_count_one() {
    let db = test_db().await;
    let repo = record_repo(&db);

    let record = repo
        .upsert("hello", Language::English, "a greeting", None)
        .await
        .unwrap();

    assert_eq!(record.word, "hello");
    assert_eq!(record.language, Language::English);
    assert_eq!(record.query_times, 1);
    assert_eq!(record.user_id, None);
    assert_eq!(record.created_at, record.updated_at);
}

#[tokio::test]
async fn should_increment_count_and_replace_definition_on_repeat() {
    let db = test_db().await;
    let repo = record_repo(&db);

    let first = repo
        .upsert("hello", Language::English, "v1", None)
        .await
        .unwrap();
    let second = repo
        .upsert("hello", Language::English, "v2", None)
        .await
        .unwrap();
    let third = repo
        .upsert("hello", Language::English, "v3", None)
        .await
        .unwrap();

    assert_eq!(
        [first.query_times, second.query_times, third.query_times],
        [1, 2, 3]
    );
    assert_eq!(third.id, first.id);
    assert_eq!(third.definition, "v3");
    assert_eq!(third.created_at, first.created_at);
    assert!(third.updated_at >= first.updated_at);

    let stored = repo
        .find("hello", Language::English, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.query_times, 3);
    assert_eq!(stored.definition, "v3");
}

#[tokio::test]
async fn should_keep_one_record_per_word_language_and_owner() {
    let db = test_db().await;
    let repo = record_repo(&db);
    let alice = seed_user(&db, "alice").await;
    let bob = seed_user(&db, "bob").await;

    repo.upsert("bank", Language::English, "d", None)
        .await
        .unwrap();
    repo.upsert("bank", Language::Chinese, "d", None)
        .await
        .unwrap();
    repo.upsert("bank", Language::English, "d", Some(alice.id))
        .await
        .unwrap();
    repo.upsert("bank", Language::English, "d", Some(bob.id))
        .await
        .unwrap();
    repo.upsert("bank", Language::English, "d", Some(alice.id))
        .await
        .unwrap();

    let anonymous = repo
        .find("bank", Language::English, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(anonymous.query_times, 1);

    let alices = repo
        .find("bank", Language::English, Some(alice.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alices.query_times, 2);

    let bobs = repo
        .find("bank", Language::English, Some(bob.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bobs.query_times, 1);

    let chinese = repo
        .find("bank", Language::Chinese, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chinese.query_times, 1);
}

#[tokio::test]
async fn should_never_adopt_anonymous_record_for_user() {
    let db = test_db().await;
    let repo = record_repo(&db);
    let alice = seed_user(&db, "alice").await;

    repo.upsert("hello", Language::English, "d", None)
        .await
        .unwrap();
    let owned = repo
        .upsert("hello", Language::English, "d", Some(alice.id))
        .await
        .unwrap();

    assert_eq!(owned.query_times, 1);
    assert_eq!(owned.user_id, Some(alice.id));
    let anonymous = repo
        .find("hello", Language::English, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(anonymous.user_id, None);
    assert_eq!(anonymous.query_times, 1);
}

#[tokio::test]
async fn should_reject_duplicate_anonymous_row_at_storage_layer() {
    let db = test_db().await;
    record_repo(&db)
        .upsert("hello", Language::English, "d", None)
        .await
        .unwrap();

    let now = Utc::now();
    let duplicate = word_records::ActiveModel {
        word: Set("hello".to_owned()),
        language: Set("english".to_owned()),
        definition: Set("raw".to_owned()),
        query_times: Set(1),
        user_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    assert!(duplicate.is_err());
}

#[tokio::test]
async fn should_count_every_concurrent_lookup_of_same_key() {
    let db = test_db().await;
    let repo = record_repo(&db);

    let mut tasks = JoinSet::new();
    for n in 0..8 {
        let repo = repo.clone();
        tasks.spawn(async move {
            repo.upsert("race", Language::English, &format!("v{n}"), None)
                .await
                .unwrap();
        });
    }
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap();
    }

    let record = repo
        .find("race", Language::English, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.query_times, 8);
}

#[tokio::test]
async fn should_rank_history_by_query_times_descending() {
    let db = test_db().await;
    let repo = record_repo(&db);

    for (word, times) in [("one", 1), ("five", 5), ("three", 3), ("four", 4)] {
        for _ in 0..times {
            repo.upsert(word, Language::English, "d", None)
                .await
                .unwrap();
        }
    }

    let ranked = repo.ranked(None, HistoryLimit::default()).await.unwrap();
    let counts: Vec<i32> = ranked.iter().map(|r| r.query_times).collect();
    assert_eq!(counts, vec![5, 4, 3, 1]);
}

#[tokio::test]
async fn should_break_ranking_ties_in_storage_order() {
    let db = test_db().await;
    let repo = record_repo(&db);
    for word in ["alpha", "beta", "gamma"] {
        repo.upsert(word, Language::English, "d", None)
            .await
            .unwrap();
    }

    let ranked = repo.ranked(None, HistoryLimit::default()).await.unwrap();
    let words: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn should_filter_history_to_exact_owner() {
    let db = test_db().await;
    let repo = record_repo(&db);
    let alice = seed_user(&db, "alice").await;

    repo.upsert("anon", Language::English, "d", None)
        .await
        .unwrap();
    repo.upsert("mine", Language::English, "d", Some(alice.id))
        .await
        .unwrap();

    let anonymous = repo.ranked(None, HistoryLimit::default()).await.unwrap();
    assert_eq!(anonymous.len(), 1);
    assert_eq!(anonymous[0].word, "anon");

    let owned = repo
        .ranked(Some(alice.id), HistoryLimit::default())
        .await
        .unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].word, "mine");
}

#[tokio::test]
async fn should_truncate_history_to_limit() {
    let db = test_db().await;
    let repo = record_repo(&db);
    for n in 0..25 {
        repo.upsert(&format!("word{n}"), Language::English, "d", None)
            .await
            .unwrap();
    }

    assert_eq!(
        repo.ranked(None, HistoryLimit::default())
            .await
            .unwrap()
            .len(),
        20
    );
    assert_eq!(repo.ranked(None, HistoryLimit(3)).await.unwrap().len(), 3);
}

#[tokio::test]
async fn should_return_exactly_requested_number_of_entries() {
    let db = test_db().await;
    let repo = record_repo(&db);
    for n in 0..120 {
        repo.upsert(&format!("word{n}"), Language::English, "d", None)
            .await
            .unwrap();
    }

    assert_eq!(repo.ranked(None, HistoryLimit(110)).await.unwrap().len(), 110);
    assert_eq!(repo.ranked(None, HistoryLimit(150)).await.unwrap().len(), 120);
    assert!(repo.ranked(None, HistoryLimit(0)).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_list_user_words_newest_update_first() {
    let db = test_db().await;
    let repo = record_repo(&db);
    let alice = seed_user(&db, "alice").await;

    for word in ["first", "second"] {
        repo.upsert(word, Language::English, "d", Some(alice.id))
            .await
            .unwrap();
    }
    repo.upsert("anon", Language::English, "d", None)
        .await
        .unwrap();
    for (word, updated_at) in [
        ("first", "2025-10-16T09:00:00Z"),
        ("second", "2025-10-16T08:00:00Z"),
    ] {
        word_records::Entity::update_many()
            .col_expr(
                word_records::Column::UpdatedAt,
                Expr::value(updated_at.parse::<DateTime<Utc>>().unwrap()),
            )
            .filter(word_records::Column::Word.eq(word))
            .exec(&db)
            .await
            .unwrap();
    }

    let words = repo.list_by_user(alice.id).await.unwrap();
    let names: Vec<&str> = words.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_and_find_user() {
    let db = test_db().await;
    let repo = user_repo(&db);
    let created = seed_user(&db, "alice").await;

    assert!(created.is_active);
    assert!(created.last_login.is_none());

    let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);
    let by_email = repo
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);
    assert!(repo.find_by_username("ALICE").await.unwrap().is_none());
    assert!(repo.find_by_id(created.id).await.unwrap().is_some());
}

#[tokio::test]
async fn should_map_unique_violations_to_conflict_errors() {
    let db = test_db().await;
    let repo = user_repo(&db);
    seed_user(&db, "alice").await;

    let same_name = repo
        .create(&NewUser {
            username: "alice".to_owned(),
            email: "other@example.com".to_owned(),
            password_hash: "h".to_owned(),
            display_name: None,
        })
        .await;
    assert!(matches!(same_name, Err(DictionaryError::UsernameTaken)));

    let same_email = repo
        .create(&NewUser {
            username: "bob".to_owned(),
            email: "alice@example.com".to_owned(),
            password_hash: "h".to_owned(),
            display_name: None,
        })
        .await;
    assert!(matches!(same_email, Err(DictionaryError::EmailTaken)));

    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_record_login_and_toggle_active_flag() {
    let db = test_db().await;
    let repo = user_repo(&db);
    let alice = seed_user(&db, "alice").await;

    let at = Utc::now();
    repo.record_login(alice.id, at).await.unwrap();
    let reloaded = repo.find_by_id(alice.id).await.unwrap().unwrap();
    assert!(reloaded.last_login.is_some());

    assert!(repo.set_active("alice", false).await.unwrap());
    assert!(!repo.find_by_id(alice.id).await.unwrap().unwrap().is_active);
    assert!(repo.set_active("alice", true).await.unwrap());
    assert!(repo.find_by_id(alice.id).await.unwrap().unwrap().is_active);
    assert!(!repo.set_active("nobody", false).await.unwrap());
}
