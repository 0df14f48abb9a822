//! User store port - credential persistence abstraction

use crate::domain::result::Result;
use crate::domain::UserRecord;

/// Whole-collection credential store
///
/// The store is read fully, mutated in memory by the caller and written
/// fully back. There are no partial updates.
pub trait UserStore: Send + Sync {
    /// Load every record, or an empty list when nothing has been saved yet
    fn load(&self) -> Result<Vec<UserRecord>>;

    /// Replace the persisted collection with `records`
    fn save(&self, records: &[UserRecord]) -> Result<()>;
}
