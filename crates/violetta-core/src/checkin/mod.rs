//! Mood check-ins: append-only snapshots of mood, context and safety.

mod model;

pub use model::{
    Boundary, BoundaryType, CheckIn, CheckInContext, CheckInDraft, CheckInState, MoodFlow,
    Safety,
};
