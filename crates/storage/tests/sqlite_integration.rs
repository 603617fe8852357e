use storage::repository::Storage;
use theory_core::model::{MasteryRecord, Theme, UserProfile};

async fn storage() -> Storage {
    Storage::sqlite("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

#[tokio::test]
async fn mastered_topics_round_trip() {
    let storage = storage().await;

    assert!(storage.progress.load_mastered().await.unwrap().is_empty());

    let mut record = MasteryRecord::new();
    record.insert("Entropy");
    record.insert("Natural Selection");
    storage.progress.save_mastered(&record).await.unwrap();

    let loaded = storage.progress.load_mastered().await.unwrap();
    assert_eq!(loaded.topics(), ["Entropy", "Natural Selection"]);
}

#[tokio::test]
async fn overwrite_replaces_the_record() {
    let storage = storage().await;

    let mut first = MasteryRecord::new();
    first.insert("A");
    storage.progress.save_mastered(&first).await.unwrap();

    let mut second = MasteryRecord::new();
    second.insert("B");
    second.insert("C");
    storage.progress.save_mastered(&second).await.unwrap();

    let loaded = storage.progress.load_mastered().await.unwrap();
    assert_eq!(loaded.topics(), ["B", "C"]);
}

#[tokio::test]
async fn profile_round_trips_and_clears() {
    let storage = storage().await;

    assert!(storage.profiles.load_profile().await.unwrap().is_none());

    let profile = UserProfile {
        email: "ada@example.com".into(),
        username: "ada".into(),
        languages: vec!["English".into(), "French".into()],
    };
    storage.profiles.save_profile(&profile).await.unwrap();
    assert_eq!(
        storage.profiles.load_profile().await.unwrap(),
        Some(profile)
    );

    storage.profiles.clear_profile().await.unwrap();
    assert!(storage.profiles.load_profile().await.unwrap().is_none());
}

#[tokio::test]
async fn theme_preference_round_trips() {
    let storage = storage().await;

    assert!(storage.preferences.theme().await.unwrap().is_none());
    storage.preferences.set_theme(Theme::Dark).await.unwrap();
    assert_eq!(storage.preferences.theme().await.unwrap(), Some(Theme::Dark));
    storage.preferences.set_theme(Theme::Light).await.unwrap();
    assert_eq!(
        storage.preferences.theme().await.unwrap(),
        Some(Theme::Light)
    );
}

#[tokio::test]
async fn migration_is_idempotent() {
    let repo = storage::sqlite::SqliteRepository::connect("sqlite::memory:")
        .await
        .unwrap();
    repo.migrate().await.unwrap();
    repo.migrate().await.unwrap();
}
