use storage::repository::{ProfileRepository, ProgressRepository};
use theory_core::model::{MasteryRecord, UserProfile};

use super::test_harness::{ViewKind, setup_view_harness};

fn profile() -> UserProfile {
    UserProfile {
        email: "ada@example.com".into(),
        username: "ada".into(),
        languages: vec!["English".into()],
    }
}

#[tokio::test(flavor = "current_thread")]
async fn onboarding_renders_without_a_profile() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Email"), "missing email field in {html}");
    assert!(html.contains("Log in"), "missing login button in {html}");
    assert!(
        html.contains("Sign up instead"),
        "missing mode switch in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_empty_state_with_a_profile() {
    let harness = setup_view_harness(ViewKind::Home);
    harness
        .storage
        .profiles
        .save_profile(&profile())
        .await
        .expect("seed profile");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Search a theory to begin"),
        "missing empty state in {html}"
    );
    assert!(html.contains("ada"), "missing username in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_lists_mastered_topics() {
    let harness = setup_view_harness(ViewKind::Home);
    harness
        .storage
        .profiles
        .save_profile(&profile())
        .await
        .expect("seed profile");
    harness
        .storage
        .progress
        .save_mastered(&MasteryRecord::from_topics(vec![
            "Entropy".into(),
            "Gravity".into(),
        ]))
        .await
        .expect("seed mastery");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Entropy"), "missing topic in {html}");
    assert!(html.contains("Gravity"), "missing topic in {html}");
    assert!(html.contains("Mastered: 2"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_the_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("question 1 of 2"),
        "missing progress line in {html}"
    );
    assert!(html.contains("Alpha"), "missing option in {html}");
    assert!(html.contains("Submit"), "missing submit button in {html}");
}
