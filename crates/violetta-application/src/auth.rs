//! Simulated passwordless sign-in.
//!
//! Nothing leaves the device: every step validates its input, waits a fake
//! network delay, and updates the persisted session.

use std::sync::Arc;

use strum::{Display, EnumString};
use tracing::info;
use violetta_core::Result;
use violetta_core::datetime::now_iso;
use violetta_core::session::{PendingMethod, Session, SessionState, UserType};
use violetta_core::validation::{
    validate_code, validate_email, validate_name, validate_optional_email, validate_phone,
};
use violetta_infrastructure::{PersistedStore, SaveOutcome};

use crate::latency::Latency;

const EMAIL_LOGIN_DELAY_MS: u64 = 250;
const PHONE_LOGIN_DELAY_MS: u64 = 300;
const VERIFY_DELAY_MS: u64 = 300;
const REGISTER_DELAY_MS: u64 = 350;
const PROVIDER_DELAY_MS: u64 = 500;

/// Channel for a phone sign-in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PhoneChannel {
    Sms,
    Whatsapp,
}

impl From<PhoneChannel> for PendingMethod {
    fn from(channel: PhoneChannel) -> Self {
        match channel {
            PhoneChannel::Sms => PendingMethod::Sms,
            PhoneChannel::Whatsapp => PendingMethod::Whatsapp,
        }
    }
}

/// Identity providers offered on the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    Google,
    Apple,
    Microsoft,
}

impl Provider {
    /// The placeholder identity a provider "returns".
    fn identity(self) -> (&'static str, &'static str) {
        match self {
            Provider::Google => ("your.name@gmail.com", "You (Google)"),
            Provider::Apple => ("private@privaterelay.appleid.com", "You (Apple)"),
            Provider::Microsoft => ("your.name@outlook.com", "You (Microsoft)"),
        }
    }
}

/// Name for a user who signed in with a code: the email's local part, else
/// `user_` plus the phone's last four digits, else `user`.
pub fn derive_user_name(email: Option<&str>, phone: Option<&str>) -> String {
    if let Some(local) = email.and_then(|e| e.split('@').next()).filter(|l| !l.is_empty()) {
        return local.to_string();
    }
    match phone.filter(|p| !p.is_empty()) {
        Some(phone) => {
            let digits: Vec<char> = phone.chars().collect();
            let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
            format!("user_{}", tail)
        }
        None => "user".to_string(),
    }
}

pub struct AuthFlow {
    session: Arc<PersistedStore<SessionState>>,
    latency: Latency,
}

impl AuthFlow {
    pub fn new(session: Arc<PersistedStore<SessionState>>, latency: Latency) -> Self {
        Self { session, latency }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read(|s| s.session.clone())
    }

    /// Remembers the email and "sends" a code to it.
    pub async fn start_email_login(&self, email: &str) -> Result<(String, SaveOutcome)> {
        let email = validate_email(email)?;
        let ((), outcome) = self.session.mutate(|s| {
            s.set_pending_email(Some(email.clone()));
            s.set_pending_phone(None);
            s.set_pending_method(Some(PendingMethod::Email));
        });
        self.latency.wait(EMAIL_LOGIN_DELAY_MS).await;
        info!("[AuthFlow] Sent sign-in code by email");
        Ok((email, outcome))
    }

    /// Remembers the phone and "sends" a code over SMS or WhatsApp.
    pub async fn start_phone_login(
        &self,
        phone: &str,
        channel: PhoneChannel,
    ) -> Result<(String, SaveOutcome)> {
        let phone = validate_phone(phone)?;
        let ((), outcome) = self.session.mutate(|s| {
            s.set_pending_phone(Some(phone.clone()));
            s.set_pending_email(None);
            s.set_pending_method(Some(channel.into()));
        });
        self.latency.wait(PHONE_LOGIN_DELAY_MS).await;
        info!("[AuthFlow] Sent sign-in code by {}", channel);
        Ok((phone, outcome))
    }

    /// Accepts any well-formed code and signs the pending user in.
    pub async fn verify_code(&self, code: &str) -> Result<(Session, SaveOutcome)> {
        validate_code(code)?;
        self.latency.wait(VERIFY_DELAY_MS).await;

        let (method, email, phone) = self.session.read(|s| {
            (
                s.pending_method.unwrap_or(PendingMethod::Email),
                s.pending_email.clone(),
                s.pending_phone.clone(),
            )
        });
        let (user_email, user_phone) = match method {
            PendingMethod::Email => (email, None),
            PendingMethod::Sms | PendingMethod::Whatsapp => (None, phone),
        };

        let session = Session {
            user_name: Some(derive_user_name(user_email.as_deref(), user_phone.as_deref())),
            user_email,
            user_phone,
            has_completed_onboarding: true,
            created_at: Some(now_iso()),
            user_type: Some(UserType::Individual),
            ..Session::default()
        };
        let ((), outcome) = self.session.mutate(|s| s.set_session(session.clone()));
        info!("[AuthFlow] Signed in via {}", method);
        Ok((session, outcome))
    }

    /// Creates an account that still has to go through onboarding.
    pub async fn register(&self, name: &str, email: Option<&str>) -> Result<(Session, SaveOutcome)> {
        let name = validate_name(name)?;
        let email = validate_optional_email(email)?;
        self.latency.wait(REGISTER_DELAY_MS).await;

        let session = Session {
            user_name: Some(name),
            user_email: email,
            has_completed_onboarding: false,
            created_at: Some(now_iso()),
            user_type: Some(UserType::Individual),
            ..Session::default()
        };
        let ((), outcome) = self.session.mutate(|s| s.set_session(session.clone()));
        info!("[AuthFlow] Registered new account");
        Ok((session, outcome))
    }

    pub async fn register_with_provider(&self, provider: Provider) -> (Session, SaveOutcome) {
        self.latency.wait(PROVIDER_DELAY_MS).await;
        let (email, name) = provider.identity();
        let session = Session {
            user_name: Some(name.to_string()),
            user_email: Some(email.to_string()),
            has_completed_onboarding: false,
            created_at: Some(now_iso()),
            user_type: Some(UserType::Individual),
            ..Session::default()
        };
        let ((), outcome) = self.session.mutate(|s| s.set_session(session.clone()));
        info!("[AuthFlow] Registered with {}", provider);
        (session, outcome)
    }

    /// Marks onboarding done. The flag is false when nobody is signed in.
    pub fn complete_onboarding(&self) -> (bool, SaveOutcome) {
        self.session.mutate(|s| {
            s.set_onboarding_done(true);
            s.is_signed_in()
        })
    }

    pub fn logout(&self) -> SaveOutcome {
        let ((), outcome) = self.session.mutate(SessionState::clear);
        info!("[AuthFlow] Signed out");
        outcome
    }
}
