//! A user's first day, persisted to disk and carried over through a backup.

use std::sync::Arc;

use tempfile::TempDir;
use violetta_application::{
    Access, AuthFlow, CheckInFlow, EntryDraft, FollowUp, Insights, JournalService, Latency,
    NextAction, Route, RouteAccess,
};
use violetta_core::KeyValueStorage;
use violetta_core::checkin::{Boundary, CheckInDraft};
use violetta_core::datetime::today_local;
use violetta_infrastructure::{BackupService, FileStorage, ViolettaStores};

#[tokio::test]
async fn test_first_day_round_trip() {
    let data_dir = TempDir::new().unwrap();
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(data_dir.path()).unwrap());
    let stores = ViolettaStores::open(storage.clone());

    let auth = AuthFlow::new(stores.session.clone(), Latency::none());
    auth.register("Ana", Some("ana@example.com")).await.unwrap();
    assert_eq!(
        RouteAccess::access(auth.current().as_ref(), Route::Private),
        Access::RedirectOnboarding
    );
    auth.complete_onboarding();
    assert_eq!(
        RouteAccess::access(auth.current().as_ref(), Route::Private),
        Access::Allow
    );

    let checkins = CheckInFlow::new(stores.checkins.clone());
    let recorded = checkins.record(
        CheckInDraft {
            mood: Some("Ansiedad".to_string()),
            boundary: Boundary::Unsure,
            ..CheckInDraft::default()
        },
        NextAction::Nothing,
    );
    assert_eq!(recorded.follow_up, FollowUp::RiskSupport);

    let journal = JournalService::new(stores.journal.clone());
    journal
        .save_entry(
            EntryDraft {
                text: "Grateful for a quiet evening.".to_string(),
                mood: Some(4),
                ..EntryDraft::default()
            },
            None,
        )
        .await
        .unwrap();
    journal.flush().await;

    let summary = Insights::summarize(&journal.entries(), 0, today_local());
    assert_eq!(summary.current_streak, 1);
    assert!(summary.last_7_days.last().unwrap().has_entry);

    let backup = BackupService::to_json_pretty(&BackupService::new(storage).export_all()).unwrap();

    let restored_dir = TempDir::new().unwrap();
    let restored: Arc<dyn KeyValueStorage> =
        Arc::new(FileStorage::new(restored_dir.path()).unwrap());
    BackupService::new(restored.clone()).import_str(&backup).unwrap();

    let restored_stores = ViolettaStores::open(restored);
    assert_eq!(
        restored_stores.session.state().session.unwrap().user_name.as_deref(),
        Some("Ana")
    );
    assert_eq!(restored_stores.checkins.state().items.len(), 1);
    assert_eq!(restored_stores.journal.state().items.len(), 3);
}
