//! Profile repository trait.

use super::model::ProfileRecord;

/// Persistence port for the profile record.
///
/// Both operations are infallible from the caller's point of view: `load`
/// falls back to the default record and `save` is best-effort. Implementations
/// log what they swallow.
pub trait ProfileRepository: Send + Sync {
    /// Returns the stored record, or the default record when nothing usable is stored.
    fn load(&self) -> ProfileRecord;

    /// Overwrites the stored record.
    fn save(&self, record: &ProfileRecord);
}
