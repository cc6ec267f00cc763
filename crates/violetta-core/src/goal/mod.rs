//! Personal goals shown on the journey view.

mod model;

pub use model::{Goal, GoalState, SUGGESTED_GOALS};
