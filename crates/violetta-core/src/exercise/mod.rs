//! Guided breathing: stored preferences and the session tick engine.

mod breathing;
mod model;

pub use breathing::{BreathPattern, BreathPhase, BreathStep, BreathingSession, SessionFrame};
pub use model::{BreathMode, DEFAULT_SESSION_MINUTES, ExerciseState, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};
