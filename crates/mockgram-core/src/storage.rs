//! Key-value storage port.

use crate::error::Result;

/// Key under which the profile record is stored.
pub const PROFILE_STORAGE_KEY: &str = "instagramProfileData";

/// A string-keyed, string-valued store (the local-storage analogue).
///
/// Implementations must make `set` all-or-nothing: a reader never sees a
/// half-written value.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
