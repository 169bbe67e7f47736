//! Persisted cache slot: one JSON file holding the last-known user collection.
//!
//! Read once at startup, overwritten wholesale after every successful mutation.
//! There is no expiry and no partial write.

use crate::error::CacheError;
use crate::user::User;
use std::fs;
use std::path::{Path, PathBuf};

/// The `users` cache slot on disk.
#[derive(Clone, Debug)]
pub struct CacheSlot {
    path: PathBuf,
}

impl CacheSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot. A missing file is an empty slot, not an error.
    pub fn load(&self) -> Result<Option<Vec<User>>, CacheError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let users = serde_json::from_str(&contents)?;
        Ok(Some(users))
    }

    /// Overwrite the slot with the full serialized collection.
    pub fn store(&self, users: &[User]) -> Result<(), CacheError> {
        let body = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn tmp_path(tag: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let n = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        p.push(format!("udm_cache_{tag}_{}_{}.json", std::process::id(), n));
        p
    }

    fn user(id: u64, email: &str) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: email.to_string(),
            username: format!("user{id}"),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn missing_file_is_empty_slot() {
        let slot = CacheSlot::new(tmp_path("missing"));
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn store_then_load_reproduces_collection() {
        let path = tmp_path("roundtrip");
        let slot = CacheSlot::new(&path);
        let users = vec![user(1, "a@x.com"), user(5, "b@x.com"), user(2, "c@x.com")];
        slot.store(&users).unwrap();

        let loaded = slot.load().unwrap().unwrap();
        fs::remove_file(&path).ok();

        // Identical ids, field values, and order
        assert_eq!(loaded, users);
    }

    #[test]
    fn corrupt_contents_is_an_error() {
        let path = tmp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();
        let slot = CacheSlot::new(&path);
        let res = slot.load();
        fs::remove_file(&path).ok();
        assert!(matches!(res, Err(CacheError::Serde(_))));
    }
}
