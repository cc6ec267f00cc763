//! Session domain: signed-in identity, pending verification, pronouns.

mod gender;
mod model;

pub use gender::{gendered, render_pronouns};
pub use model::{
    CustomPronouns, GrammaticalGender, PendingMethod, PronounType, Pronouns, Session,
    SessionState, UserType,
};
