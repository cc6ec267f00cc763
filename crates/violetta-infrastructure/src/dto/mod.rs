//! Persistence formats: the per-key envelope and the backup file.

mod backup;
mod envelope;

pub use backup::{BACKUP_APP, BACKUP_VERSION, Backup};
pub use envelope::{PersistEnvelope, decode, encode};
