//! Journal domain: entries, derived notes, search.

mod model;
mod note;

pub use model::{DEFAULT_TITLE, JournalEntry, JournalState};
pub use note::infer_note;
