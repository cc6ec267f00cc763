//! Session domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::keys;
use crate::persist::PersistedState;

/// How a pending sign-in code is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PendingMethod {
    Email,
    Sms,
    Whatsapp,
}

/// Account kind. Only business admins get the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "b2c")]
    Individual,
    #[serde(rename = "b2b-employee")]
    Employee,
    #[serde(rename = "b2b-admin")]
    Admin,
}

/// Grammatical gender used to inflect UI copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
pub enum GrammaticalGender {
    #[serde(rename = "f")]
    #[strum(serialize = "f")]
    Feminine,
    #[serde(rename = "m")]
    #[strum(serialize = "m")]
    Masculine,
    #[default]
    #[serde(rename = "x")]
    #[strum(serialize = "x")]
    Neutral,
}

/// Built-in pronoun sets plus a free-form option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum PronounType {
    #[serde(rename = "ella")]
    #[strum(serialize = "ella")]
    She,
    #[serde(rename = "él")]
    #[strum(to_string = "él", serialize = "el")]
    He,
    #[serde(rename = "elle")]
    #[strum(serialize = "elle")]
    They,
    #[serde(rename = "otro")]
    #[strum(serialize = "otro")]
    Other,
}

impl PronounType {
    /// Gender that goes with a pronoun set unless the user picks another.
    pub fn default_gender(self) -> GrammaticalGender {
        match self {
            PronounType::She => GrammaticalGender::Feminine,
            PronounType::He => GrammaticalGender::Masculine,
            PronounType::They | PronounType::Other => GrammaticalGender::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomPronouns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronouns {
    #[serde(rename = "type")]
    pub kind: PronounType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPronouns>,
}

/// The signed-in user. Created on registration or code verification,
/// cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(default)]
    pub has_completed_onboarding: bool,
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<Pronouns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammatical_gender: Option<GrammaticalGender>,
}

impl Session {
    /// Name shown in greetings, falling back to a friendly default.
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("friend")
    }

    pub fn gender(&self) -> GrammaticalGender {
        self.grammatical_gender.unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == Some(UserType::Admin)
    }
}

/// Persisted session slice: the current session plus the not-yet-verified
/// sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_method: Option<PendingMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_phone: Option<String>,
}

impl SessionState {
    pub fn set_pending_email(&mut self, email: Option<String>) {
        self.pending_email = email;
    }

    pub fn set_pending_phone(&mut self, phone: Option<String>) {
        self.pending_phone = phone;
    }

    pub fn set_pending_method(&mut self, method: Option<PendingMethod>) {
        self.pending_method = method;
    }

    /// Installs a session and forgets any pending verification.
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
        self.clear_pending();
    }

    /// Marks onboarding done or pending. Does nothing when signed out.
    pub fn set_onboarding_done(&mut self, done: bool) {
        if let Some(session) = self.session.as_mut() {
            session.has_completed_onboarding = done;
        }
    }

    /// Edits name and email from the profile screen. Returns false when
    /// signed out.
    pub fn update_profile(&mut self, name: Option<String>, email: Option<String>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                if let Some(name) = name {
                    session.user_name = Some(name);
                }
                if let Some(email) = email {
                    session.user_email = Some(email);
                }
                true
            }
            None => false,
        }
    }

    /// Stores pronouns. When `gender` is `None` the pronoun set's default
    /// gender is used. Returns false when signed out.
    pub fn set_pronouns(&mut self, pronouns: Pronouns, gender: Option<GrammaticalGender>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                let gender = gender.unwrap_or_else(|| pronouns.kind.default_gender());
                session.pronouns = Some(pronouns);
                session.grammatical_gender = Some(gender);
                true
            }
            None => false,
        }
    }

    fn clear_pending(&mut self) {
        self.pending_method = None;
        self.pending_email = None;
        self.pending_phone = None;
    }

    /// Signs out.
    pub fn clear(&mut self) {
        self.session = None;
        self.clear_pending();
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

impl PersistedState for SessionState {
    const KEY: &'static str = keys::SESSION;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }
}
