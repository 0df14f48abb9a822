//! In-memory user store for tests and throwaway sessions

use std::sync::Mutex;

use crate::domain::result::{Error, Result, StorageErrorKind};
use crate::domain::UserRecord;
use crate::ports::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
    saves: Mutex<usize>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            saves: Mutex::new(0),
        }
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|n| *n).unwrap_or(0)
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> Error {
    Error::storage(StorageErrorKind::ReadFailed, format!("Lock poisoned: {}", e))
}

impl UserStore for InMemoryUserStore {
    fn load(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.lock().map_err(poisoned)?.clone())
    }

    fn save(&self, records: &[UserRecord]) -> Result<()> {
        *self.records.lock().map_err(poisoned)? = records.to_vec();
        *self.saves.lock().map_err(poisoned)? += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_contents() {
        let store = InMemoryUserStore::with_records(vec![UserRecord::new("a@gmail.com", "d")]);
        store.save(&[UserRecord::new("b@gmail.com", "e")]).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "b@gmail.com");
        assert_eq!(store.save_count(), 1);
    }
}
