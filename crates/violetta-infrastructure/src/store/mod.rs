//! Persisted feature stores.

mod flags;
mod persisted;

pub use flags::{get_boolean, set_boolean};
pub use persisted::{PersistedStore, SaveOutcome};

use std::sync::Arc;

use violetta_core::KeyValueStorage;
use violetta_core::chat::ChatState;
use violetta_core::checkin::CheckInState;
use violetta_core::contact::{EmergencyState, TrustedContactsState};
use violetta_core::exercise::ExerciseState;
use violetta_core::goal::GoalState;
use violetta_core::help::HelpMessageTemplate;
use violetta_core::journal::JournalState;
use violetta_core::keys;
use violetta_core::onboarding::OnboardingAnswers;
use violetta_core::session::SessionState;

/// Every feature store, opened once against the same storage.
#[derive(Clone)]
pub struct ViolettaStores {
    storage: Arc<dyn KeyValueStorage>,
    pub session: Arc<PersistedStore<SessionState>>,
    pub journal: Arc<PersistedStore<JournalState>>,
    pub exercises: Arc<PersistedStore<ExerciseState>>,
    pub goals: Arc<PersistedStore<GoalState>>,
    pub checkins: Arc<PersistedStore<CheckInState>>,
    pub emergency: Arc<PersistedStore<EmergencyState>>,
    pub onboarding: Arc<PersistedStore<OnboardingAnswers>>,
    pub chat: Arc<PersistedStore<ChatState>>,
    pub trusted_contacts: Arc<PersistedStore<TrustedContactsState>>,
    pub help_message: Arc<PersistedStore<HelpMessageTemplate>>,
}

impl ViolettaStores {
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            session: Arc::new(PersistedStore::open(storage.clone())),
            journal: Arc::new(PersistedStore::open(storage.clone())),
            exercises: Arc::new(PersistedStore::open(storage.clone())),
            goals: Arc::new(PersistedStore::open(storage.clone())),
            checkins: Arc::new(PersistedStore::open(storage.clone())),
            emergency: Arc::new(PersistedStore::open(storage.clone())),
            onboarding: Arc::new(PersistedStore::open(storage.clone())),
            chat: Arc::new(PersistedStore::open(storage.clone())),
            trusted_contacts: Arc::new(PersistedStore::open(storage.clone())),
            help_message: Arc::new(PersistedStore::open(storage.clone())),
            storage,
        }
    }

    pub fn storage(&self) -> Arc<dyn KeyValueStorage> {
        self.storage.clone()
    }

    /// Re-hydrates every store, e.g. after a backup import or reset.
    pub fn reload_all(&self) {
        self.session.reload();
        self.journal.reload();
        self.exercises.reload();
        self.goals.reload();
        self.checkins.reload();
        self.emergency.reload();
        self.onboarding.reload();
        self.chat.reload();
        self.trusted_contacts.reload();
        self.help_message.reload();
    }

    pub fn disclaimer_accepted(&self) -> bool {
        get_boolean(self.storage.as_ref(), keys::DISCLAIMER_ACCEPTED, false)
    }

    pub fn set_disclaimer_accepted(&self, accepted: bool) {
        set_boolean(self.storage.as_ref(), keys::DISCLAIMER_ACCEPTED, accepted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_stores_share_storage() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let stores = ViolettaStores::open(storage.clone());
        stores.goals.mutate(|g| g.add("Walk", 1));
        stores.exercises.mutate(|e| e.set_minutes(5));

        let mut stored = storage.keys().unwrap();
        stored.sort();
        assert_eq!(stored, vec![keys::EXERCISES, keys::GOALS]);

        storage.remove(keys::GOALS).unwrap();
        stores.reload_all();
        assert!(stores.goals.state().is_empty());
        assert_eq!(stores.exercises.state().session_minutes, 5);
    }

    #[test]
    fn test_disclaimer_flag() {
        let stores = ViolettaStores::open(Arc::new(MemoryStorage::new()));
        assert!(!stores.disclaimer_accepted());
        stores.set_disclaimer_accepted(true);
        assert!(stores.disclaimer_accepted());
    }
}
