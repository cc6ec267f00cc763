//! Storage keys owned by the feature stores.

pub const SESSION: &str = "violetta-session";
pub const JOURNAL: &str = "violetta-journal";
pub const EXERCISES: &str = "violetta-exercises";
pub const GOALS: &str = "violetta-goals";
pub const CHECKINS: &str = "violetta-checkins";
pub const EMERGENCY: &str = "violetta-emergency";
pub const ONBOARDING: &str = "violetta-onboarding";
pub const CHAT: &str = "violetta-chat";
pub const TRUSTED_CONTACTS: &str = "violetta-trusted-contacts";
pub const HELP_MESSAGE_TEMPLATE: &str = "violetta-help-message-template";
pub const DISCLAIMER_ACCEPTED: &str = "violetta-disclaimer-accepted";

/// Every key that backup, restore and reset operate on.
pub const KNOWN_KEYS: [&str; 11] = [
    SESSION,
    JOURNAL,
    EXERCISES,
    GOALS,
    CHECKINS,
    EMERGENCY,
    ONBOARDING,
    CHAT,
    TRUSTED_CONTACTS,
    HELP_MESSAGE_TEMPLATE,
    DISCLAIMER_ACCEPTED,
];
