//! Records a mood check-in and decides what the home screen offers next.

use std::sync::Arc;

use strum::{Display, EnumString};
use violetta_core::checkin::{Boundary, CheckIn, CheckInDraft, CheckInState};
use violetta_core::datetime::now_iso;
use violetta_infrastructure::{PersistedStore, SaveOutcome};

/// What the user chose to do after answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NextAction {
    Journal,
    Help,
    #[default]
    Nothing,
}

/// What the app shows after the check-in is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// The risk-support prompt with emergency options; overrides the user's choice.
    RiskSupport,
    Journal,
    Help,
    None,
}

#[derive(Debug, Clone)]
pub struct RecordedCheckIn {
    pub check_in: CheckIn,
    pub follow_up: FollowUp,
    pub outcome: SaveOutcome,
}

pub struct CheckInFlow {
    store: Arc<PersistedStore<CheckInState>>,
}

impl CheckInFlow {
    pub fn new(store: Arc<PersistedStore<CheckInState>>) -> Self {
        Self { store }
    }

    /// Stamps the answers with the current time and appends them.
    pub fn record(&self, mut draft: CheckInDraft, next: NextAction) -> RecordedCheckIn {
        draft.timestamp = now_iso();
        if draft.boundary == Boundary::No {
            draft.boundary_types.clear();
        }

        let follow_up = if draft.needs_risk_support() {
            FollowUp::RiskSupport
        } else {
            match next {
                NextAction::Journal => FollowUp::Journal,
                NextAction::Help => FollowUp::Help,
                NextAction::Nothing => FollowUp::None,
            }
        };

        let (check_in, outcome) = self.store.mutate(|s| s.add(draft));
        tracing::debug!("[CheckInFlow] Recorded check-in {} -> {:?}", check_in.id, follow_up);
        RecordedCheckIn {
            check_in,
            follow_up,
            outcome,
        }
    }

    pub fn history(&self) -> Vec<CheckIn> {
        self.store.read(|s| s.items.clone())
    }
}
