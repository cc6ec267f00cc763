//! Application layer for Violetta.
//!
//! Use cases that coordinate the domain models with the persisted stores:
//! sign-in, route guards, check-ins, journaling, chat, insights and the help message.

pub mod auth;
pub mod chat_service;
pub mod checkin_flow;
pub mod deferred;
pub mod help_message;
pub mod insights;
pub mod journal_service;
pub mod latency;
pub mod route;

pub use auth::{AuthFlow, PhoneChannel, Provider};
pub use chat_service::ChatService;
pub use checkin_flow::{CheckInFlow, FollowUp, NextAction};
pub use deferred::DeferredSaver;
pub use help_message::HelpMessageService;
pub use insights::{Insights, JourneySummary};
pub use journal_service::{EntryDraft, JournalService};
pub use latency::Latency;
pub use route::{Access, Route, RouteAccess};
