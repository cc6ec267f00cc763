//! Check-in domain models.
//!
//! Wire values stay in the app's Spanish vocabulary (`"si"`,
//! `"no_segura"`, `"pareja"`, ...) so backups remain interchangeable.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::keys;
use crate::persist::{PersistedState, Trimmable, legacy_items};

/// Where the feeling came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum CheckInContext {
    #[serde(rename = "pareja")]
    #[strum(serialize = "pareja", serialize = "partner")]
    Partner,
    #[serde(rename = "familia")]
    #[strum(serialize = "familia", serialize = "family")]
    Family,
    #[serde(rename = "trabajo")]
    #[strum(serialize = "trabajo", serialize = "work")]
    Work,
    #[serde(rename = "amistades")]
    #[strum(serialize = "amistades", serialize = "friends")]
    Friends,
    #[serde(rename = "publico")]
    #[strum(serialize = "publico", serialize = "public")]
    Public,
    #[serde(rename = "otro")]
    #[strum(serialize = "otro", serialize = "other")]
    Other,
}

/// Whether the user felt a boundary was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
pub enum Boundary {
    #[default]
    #[serde(rename = "no")]
    #[strum(serialize = "no")]
    No,
    #[serde(rename = "duda")]
    #[strum(serialize = "duda", serialize = "unsure")]
    Unsure,
    #[serde(rename = "si")]
    #[strum(serialize = "si", serialize = "yes")]
    Yes,
}

/// Kind of boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum BoundaryType {
    #[serde(rename = "control")]
    #[strum(serialize = "control")]
    Control,
    #[serde(rename = "insultos")]
    #[strum(serialize = "insultos", serialize = "insults")]
    Insults,
    #[serde(rename = "celos")]
    #[strum(serialize = "celos", serialize = "jealousy")]
    Jealousy,
    #[serde(rename = "aislamiento")]
    #[strum(serialize = "aislamiento", serialize = "isolation")]
    Isolation,
    #[serde(rename = "dinero")]
    #[strum(serialize = "dinero", serialize = "money")]
    Money,
    #[serde(rename = "sexual")]
    #[strum(serialize = "sexual")]
    Sexual,
    #[serde(rename = "fisico")]
    #[strum(serialize = "fisico", serialize = "physical")]
    Physical,
    #[serde(rename = "digital")]
    #[strum(serialize = "digital")]
    Digital,
}

/// How safe the user feels right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Safety {
    #[serde(rename = "si")]
    #[strum(serialize = "si", serialize = "safe")]
    Safe,
    #[serde(rename = "no_segura")]
    #[strum(serialize = "no_segura", serialize = "unsure")]
    NotSure,
    #[serde(rename = "no")]
    #[strum(serialize = "no", serialize = "unsafe")]
    Unsafe,
}

/// Follow-up tone chosen from the mood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoodFlow {
    Positive,
    Neutral,
    Negative,
}

impl MoodFlow {
    /// "Happy"/"Feliz" is positive, "Neutral" neutral, everything else negative.
    pub fn from_mood(mood: &str) -> Self {
        match mood.trim().to_lowercase().as_str() {
            "feliz" | "happy" => MoodFlow::Positive,
            "neutral" => MoodFlow::Neutral,
            _ => MoodFlow::Negative,
        }
    }
}

/// Check-in fields as captured by the mood modal, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDraft {
    /// RFC 3339 timestamp.
    pub timestamp: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default, rename = "contexto")]
    pub context: Option<CheckInContext>,
    #[serde(default)]
    pub boundary: Boundary,
    #[serde(default, rename = "boundaryTipos")]
    pub boundary_types: Vec<BoundaryType>,
    #[serde(default)]
    pub safety: Option<Safety>,
}

impl CheckInDraft {
    /// True when the answers call for the risk-support prompt: any boundary
    /// doubt or crossing, or not feeling safe.
    pub fn needs_risk_support(&self) -> bool {
        self.boundary != Boundary::No
            || matches!(self.safety, Some(Safety::Unsafe) | Some(Safety::NotSure))
    }

    pub fn mood_flow(&self) -> Option<MoodFlow> {
        self.mood.as_deref().map(MoodFlow::from_mood)
    }
}

/// A recorded check-in. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: String,
    #[serde(flatten)]
    pub fields: CheckInDraft,
}

impl CheckIn {
    pub fn needs_risk_support(&self) -> bool {
        self.fields.needs_risk_support()
    }
}

/// Persisted check-ins, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckInState {
    #[serde(default)]
    pub items: Vec<CheckIn>,
}

impl CheckInState {
    /// Assigns an id and prepends the check-in.
    pub fn add(&mut self, draft: CheckInDraft) -> CheckIn {
        let check_in = CheckIn {
            id: Uuid::new_v4().to_string(),
            fields: draft,
        };
        self.items.insert(0, check_in.clone());
        check_in
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn latest(&self) -> Option<&CheckIn> {
        self.items.first()
    }
}

impl Trimmable for CheckInState {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn keep_newest(&mut self, n: usize) {
        self.items.truncate(n);
    }
}

impl PersistedState for CheckInState {
    const KEY: &'static str = keys::CHECKINS;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }

    fn from_legacy(value: &JsonValue) -> Option<Self> {
        legacy_items(value).map(|items| Self { items })
    }

    fn as_trimmable(&mut self) -> Option<&mut dyn Trimmable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft(boundary: Boundary, safety: Option<Safety>) -> CheckInDraft {
        CheckInDraft {
            timestamp: "2025-10-19T10:00:00.000Z".to_string(),
            mood: Some("Triste".to_string()),
            boundary,
            safety,
            ..CheckInDraft::default()
        }
    }

    #[test]
    fn test_risk_support() {
        assert!(!draft(Boundary::No, None).needs_risk_support());
        assert!(!draft(Boundary::No, Some(Safety::Safe)).needs_risk_support());
        assert!(draft(Boundary::Yes, None).needs_risk_support());
        assert!(draft(Boundary::Unsure, Some(Safety::Safe)).needs_risk_support());
        assert!(draft(Boundary::No, Some(Safety::Unsafe)).needs_risk_support());
        assert!(draft(Boundary::No, Some(Safety::NotSure)).needs_risk_support());
    }

    #[test]
    fn test_mood_flow() {
        assert_eq!(MoodFlow::from_mood("Feliz"), MoodFlow::Positive);
        assert_eq!(MoodFlow::from_mood("neutral"), MoodFlow::Neutral);
        assert_eq!(MoodFlow::from_mood("Molestia"), MoodFlow::Negative);
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let mut state = CheckInState::default();
        let first = state.add(draft(Boundary::No, None));
        let second = state.add(draft(Boundary::Yes, None));
        assert_ne!(first.id, second.id);
        assert_eq!(state.latest().unwrap().id, second.id);
    }

    #[test]
    fn test_wire_format_matches_original_vocabulary() {
        let mut d = draft(Boundary::Yes, Some(Safety::Unsafe));
        d.context = Some(CheckInContext::Partner);
        d.boundary_types = vec![BoundaryType::Jealousy];
        let check_in = CheckIn {
            id: "c1".to_string(),
            fields: d,
        };
        let json = serde_json::to_value(&check_in).unwrap();
        assert_eq!(json["id"], "c1");
        assert_eq!(json["boundary"], "si");
        assert_eq!(json["safety"], "no");
        assert_eq!(json["contexto"], "pareja");
        assert_eq!(json["boundaryTipos"][0], "celos");

        let back: CheckIn = serde_json::from_value(json).unwrap();
        assert!(back.needs_risk_support());
    }

    #[test]
    fn test_parse_from_cli_words() {
        assert_eq!(Boundary::from_str("yes").unwrap(), Boundary::Yes);
        assert_eq!(Safety::from_str("no_segura").unwrap(), Safety::NotSure);
        assert_eq!(CheckInContext::from_str("work").unwrap(), CheckInContext::Work);
    }
}
