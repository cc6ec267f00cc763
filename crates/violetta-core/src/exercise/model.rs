use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::keys;
use crate::persist::PersistedState;

pub const MIN_SESSION_MINUTES: u32 = 1;
pub const MAX_SESSION_MINUTES: u32 = 10;
pub const DEFAULT_SESSION_MINUTES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
pub enum BreathMode {
    /// Box breathing, 4-4-4-4.
    #[default]
    #[serde(rename = "box44")]
    #[strum(serialize = "box44", serialize = "box")]
    Box44,
    /// 4-7-8 breathing for sleep.
    #[serde(rename = "478")]
    #[strum(serialize = "478")]
    FourSevenEight,
}

/// Breathing preferences and the last completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseState {
    #[serde(default)]
    pub breath_mode: BreathMode,
    #[serde(default = "default_minutes")]
    pub session_minutes: u32,
    #[serde(default, rename = "lastCompletedISO")]
    pub last_completed_iso: Option<String>,
}

fn default_minutes() -> u32 {
    DEFAULT_SESSION_MINUTES
}

impl Default for ExerciseState {
    fn default() -> Self {
        Self {
            breath_mode: BreathMode::default(),
            session_minutes: DEFAULT_SESSION_MINUTES,
            last_completed_iso: None,
        }
    }
}

impl ExerciseState {
    pub fn set_mode(&mut self, mode: BreathMode) {
        self.breath_mode = mode;
    }

    /// Sets the session length, clamped to 1..=10 minutes.
    pub fn set_minutes(&mut self, minutes: i64) {
        self.session_minutes =
            minutes.clamp(MIN_SESSION_MINUTES as i64, MAX_SESSION_MINUTES as i64) as u32;
    }

    pub fn mark_completed(&mut self, at_iso: String) {
        self.last_completed_iso = Some(at_iso);
    }
}

impl PersistedState for ExerciseState {
    const KEY: &'static str = keys::EXERCISES;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }

    fn after_load(mut self) -> Self {
        self.set_minutes(self.session_minutes as i64);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_clamped() {
        let mut state = ExerciseState::default();
        state.set_minutes(0);
        assert_eq!(state.session_minutes, 1);
        state.set_minutes(42);
        assert_eq!(state.session_minutes, 10);
        state.set_minutes(-3);
        assert_eq!(state.session_minutes, 1);
        state.set_minutes(5);
        assert_eq!(state.session_minutes, 5);
    }

    #[test]
    fn test_wire_names() {
        let mut state = ExerciseState::default();
        state.set_mode(BreathMode::FourSevenEight);
        state.mark_completed("2025-10-19T08:00:00.000Z".to_string());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["breathMode"], "478");
        assert_eq!(json["sessionMinutes"], 2);
        assert_eq!(json["lastCompletedISO"], "2025-10-19T08:00:00.000Z");
    }

    #[test]
    fn test_after_load_clamps_stored_minutes() {
        let state: ExerciseState =
            serde_json::from_str(r#"{"breathMode":"box44","sessionMinutes":99}"#).unwrap();
        assert_eq!(state.after_load().session_minutes, 10);
    }
}
