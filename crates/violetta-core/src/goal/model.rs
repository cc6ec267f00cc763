use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::keys;
use crate::persist::{PersistedState, legacy_items};

/// Goals offered as one-tap suggestions.
pub const SUGGESTED_GOALS: [&str; 5] = [
    "Write in my journal 3 times a week.",
    "Do one breathing exercise every day.",
    "Notice and appreciate one positive thing each day.",
    "Spend 10 minutes on personal reflection daily.",
    "Set one healthy boundary this week.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub text: String,
    /// Unix milliseconds.
    pub created_at: i64,
}

/// Goals in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalState {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl GoalState {
    /// Appends a goal created at `now_millis`. Blank text is ignored.
    ///
    /// Ids are `g-<millis>`; a numeric suffix keeps them unique when two
    /// goals land on the same millisecond.
    pub fn add(&mut self, text: &str, now_millis: i64) -> Option<Goal> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let base = format!("g-{}", now_millis);
        let mut id = base.clone();
        let mut suffix = 1;
        while self.goals.iter().any(|g| g.id == id) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        let goal = Goal {
            id,
            text: text.to_string(),
            created_at: now_millis,
        };
        self.goals.push(goal.clone());
        Some(goal)
    }

    /// Removes a goal by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl PersistedState for GoalState {
    const KEY: &'static str = keys::GOALS;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }

    fn from_legacy(value: &JsonValue) -> Option<Self> {
        legacy_items(value).map(|goals| Self { goals })
    }
}
