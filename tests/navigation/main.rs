//! Integration tests for the navigation phase controller.


use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use contact_directory::navigation::{
    Content, Navigator, Page, Phase, Route, Screen, Settled, Submission,
};
use contact_directory::validate::{NAME_REQUIRED, PHONE_REQUIRED};
use contact_directory::{Directory, InMemoryBlobStore, RecordDraft};
use support::{instant, slow, ReadOnlyStore, SlowWriteStore, LATENCY};

fn form(name: &str, phone: &str) -> HashMap<String, String> {
    HashMap::from([
        ("name".to_string(), name.to_string()),
        ("phone".to_string(), phone.to_string()),
    ])
}

#[tokio::test]
async fn index_loads_contact_list() {
    let nav = instant();
    assert_eq!(nav.state().content(), Content::Blank);

    assert_eq!(nav.navigate(Route::Index).await, Settled::Applied);

    let state = nav.state();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.route, Some(Route::Index));
    assert_eq!(state.contacts().len(), 11);
    assert_eq!(state.page(), Some(&Page::Index));
}

#[tokio::test]
async fn show_loads_the_contact() {
    let nav = instant();
    nav.navigate(Route::Show("1".into())).await;

    match nav.state().page() {
        Some(Page::Show(record)) => assert_eq!(record.name, "Danilo"),
        other => panic!("unexpected page: {other:?}"),
    }
}

#[tokio::test]
async fn missing_contact_is_a_full_page_error() {
    let nav = instant();
    nav.navigate(Route::Show("does-not-exist".into())).await;

    let state = nav.state();
    assert_eq!(state.phase, Phase::Idle);
    match &state.screen {
        Screen::Error(body) => {
            assert_eq!(body.status, 404);
            assert!(body.message.contains("does-not-exist"));
        }
        other => panic!("expected error screen, got {other:?}"),
    }
    assert!(state.contacts().is_empty());
}

#[tokio::test]
async fn create_redirects_to_new_contact() {
    let nav = instant();
    nav.navigate(Route::Create).await;

    let settled = nav
        .submit(Submission::create_from_form(&form("Ana", "000")))
        .await;
    assert_eq!(settled, Settled::Applied);

    let state = nav.state();
    let Some(Route::Show(id)) = state.route.clone() else {
        panic!("expected redirect to the new contact, got {:?}", state.route);
    };
    match state.page() {
        Some(Page::Show(record)) => {
            assert_eq!(record.id, id);
            assert_eq!(record.name, "Ana");
        }
        other => panic!("unexpected page: {other:?}"),
    }
    assert_eq!(state.contacts().len(), 12);
    assert_eq!(state.contacts()[0].name, "Ana");
}

#[tokio::test]
async fn invalid_create_stays_on_form_with_inline_error() {
    let nav = instant();
    nav.navigate(Route::Create).await;

    nav.submit(Submission::create_from_form(&form("", "123")))
        .await;

    let state = nav.state();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.route, Some(Route::Create));
    assert_eq!(
        state.page(),
        Some(&Page::Create {
            error: Some(NAME_REQUIRED.to_string())
        })
    );
    assert_eq!(state.contacts().len(), 11);
}

#[tokio::test]
async fn invalid_update_keeps_loaded_record_on_form() {
    let nav = instant();
    nav.navigate(Route::Edit("1".into())).await;

    nav.submit(Submission::update_from_form("1", &form("Ana", "")))
        .await;

    match nav.state().page() {
        Some(Page::Edit { record, error }) => {
            assert_eq!(record.name, "Danilo");
            assert_eq!(error.as_deref(), Some(PHONE_REQUIRED));
        }
        other => panic!("unexpected page: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_update_of_other_contact_shows_that_contact() {
    let nav = instant();
    nav.navigate(Route::Edit("1".into())).await;

    nav.submit(Submission::update_from_form("2", &form("", "222")))
        .await;

    match nav.state().page() {
        Some(Page::Edit { record, error }) => {
            assert_eq!(record.id, "2");
            assert_eq!(record.phone, "222");
            assert_eq!(error.as_deref(), Some(NAME_REQUIRED));
        }
        other => panic!("unexpected page: {other:?}"),
    }
}

#[tokio::test]
async fn update_redirects_to_updated_contact() {
    let nav = instant();
    nav.navigate(Route::Edit("1".into())).await;

    nav.submit(Submission::Update("1".into(), RecordDraft::new("Ana", "000")))
        .await;

    let state = nav.state();
    assert_eq!(state.route, Some(Route::Show("1".into())));
    match state.page() {
        Some(Page::Show(record)) => {
            assert_eq!(record.id, "1");
            assert_eq!(record.name, "Ana");
            assert_eq!(record.phone, "000");
        }
        other => panic!("unexpected page: {other:?}"),
    }
    assert_eq!(state.contacts()[0].name, "Ana");
}

#[tokio::test]
async fn update_of_missing_contact_is_a_full_page_error() {
    let nav = instant();
    nav.navigate(Route::Index).await;

    nav.submit(Submission::Update("ghost".into(), RecordDraft::new("Ana", "000")))
        .await;

    assert!(matches!(nav.state().screen, Screen::Error(ref body) if body.status == 404));
}

#[tokio::test]
async fn delete_redirects_to_index() {
    let nav = instant();
    nav.navigate(Route::Show("1".into())).await;

    nav.submit(Submission::Delete("1".into())).await;

    let state = nav.state();
    assert_eq!(state.route, Some(Route::Index));
    assert_eq!(state.contacts().len(), 10);
    assert!(state.contacts().iter().all(|r| r.id != "1"));

    // already gone: still a redirect, never an error
    nav.submit(Submission::Delete("1".into())).await;
    assert_eq!(nav.state().route, Some(Route::Index));
}

#[tokio::test]
async fn failed_delete_is_a_full_page_error() {
    let directory = Directory::new(ReadOnlyStore(InMemoryBlobStore::new()))
        .with_latency(Duration::ZERO);
    let nav = Navigator::new(Arc::new(directory));
    nav.navigate(Route::Show("1".into())).await;

    nav.submit(Submission::Delete("1".into())).await;

    let state = nav.state();
    assert_eq!(state.phase, Phase::Idle);
    assert!(matches!(state.screen, Screen::Error(ref body) if body.status == 500));
}

#[tokio::test(start_paused = true)]
async fn loading_replaces_detail_with_placeholder() {
    let nav = slow();
    nav.navigate(Route::Show("1".into())).await;
    let mut phases = nav.subscribe();

    let observe = async {
        tokio::time::sleep(LATENCY / 2).await;
        assert!(phases.has_changed().unwrap());
        assert_eq!(*phases.borrow_and_update(), Phase::Loading);

        let state = nav.state();
        assert_eq!(state.content(), Content::Placeholder);
        // the list from the previous page stays visible
        assert_eq!(state.contacts().len(), 11);
    };
    let (settled, ()) = tokio::join!(nav.navigate(Route::Show("2".into())), observe);

    assert_eq!(settled, Settled::Applied);
    assert_eq!(nav.phase(), Phase::Idle);
    assert!(matches!(nav.state().content(), Content::Page(Page::Show(r)) if r.id == "2"));
}

#[tokio::test(start_paused = true)]
async fn submitting_disables_the_submit_control() {
    let nav = slow();
    nav.navigate(Route::Create).await;
    let idle = nav.state().submit_control().unwrap();
    assert_eq!(idle.label, "Save");
    assert!(!idle.disabled);

    let observe = async {
        tokio::time::sleep(LATENCY / 2).await;
        let control = nav.state().submit_control().unwrap();
        assert_eq!(control.label, "Saving...");
        assert!(control.disabled);
    };
    tokio::join!(
        nav.submit(Submission::Create(RecordDraft::new("", ""))),
        observe
    );

    let state = nav.state();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.submit_control().map(|c| c.disabled), Some(false));
    assert_eq!(state.page().and_then(Page::form_error), Some(NAME_REQUIRED));
}

#[tokio::test(start_paused = true)]
async fn stale_load_never_overwrites_newer_page() {
    let nav = slow();

    let newer = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        nav.navigate(Route::Show("2".into())).await
    };
    let between = async {
        // first load has finished, second has not
        tokio::time::sleep(LATENCY + Duration::from_millis(5)).await;
        let state = nav.state();
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.route, None);
    };

    let (first, second, ()) =
        tokio::join!(nav.navigate(Route::Show("1".into())), newer, between);

    assert_eq!(first, Settled::Superseded);
    assert_eq!(second, Settled::Applied);
    let state = nav.state();
    assert_eq!(state.route, Some(Route::Show("2".into())));
    assert_eq!(state.phase, Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn superseded_submission_still_persists() {
    let nav = slow();
    nav.navigate(Route::Create).await;

    let newer = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        nav.navigate(Route::Index).await
    };
    let (submitted, navigated) = tokio::join!(
        nav.submit(Submission::Create(RecordDraft::new("Ana", "000"))),
        newer
    );

    assert_eq!(submitted, Settled::Superseded);
    assert_eq!(navigated, Settled::Applied);
    let state = nav.state();
    assert_eq!(state.route, Some(Route::Index));
    assert_eq!(state.contacts().len(), 12);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn navigation_after_write_outranks_submission_redirect() {
    for round in 0..40u64 {
        let store = Arc::new(SlowWriteStore::new(Duration::from_millis(2)));
        let nav = Arc::new(Navigator::new(Arc::new(
            Directory::new(store.clone()).with_latency(Duration::ZERO),
        )));

        let submit = tokio::spawn({
            let nav = nav.clone();
            async move {
                nav.submit(Submission::Create(RecordDraft::new("Ana", "000")))
                    .await
            }
        });
        while !store.writing() {
            tokio::task::yield_now().await;
        }
        // land anywhere from mid-write to after the redirect has started
        tokio::time::sleep(Duration::from_micros(round * 100)).await;
        let navigated = nav.navigate(Route::Index).await;
        submit.await.unwrap();

        assert_eq!(navigated, Settled::Applied, "round {round}");
        let state = nav.state();
        assert_eq!(state.route, Some(Route::Index), "round {round}");
        assert_eq!(state.phase, Phase::Idle, "round {round}");
    }
}
