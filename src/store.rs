//! The user store: keeps the in-memory collection, the cache slot, and the
//! remote source of truth consistent across CRUD operations.
//!
//! Every mutation is a transaction from the caller's point of view: validate,
//! mutate in memory, persist the full collection to the cache slot, report.
//! When the persist step fails the in-memory edit is rolled back, so callers
//! never observe a partial mutation. Mutating methods take `&mut self`; one
//! writer at a time is enforced by ownership, not by a lock.

use crate::cache::CacheSlot;
use crate::error::StoreError;
use crate::remote::RemoteDirectory;
use crate::user::{User, UserDraft};
use crate::validate::validate;
use tracing::{debug, warn};

pub struct UserStore<R> {
    remote: R,
    cache: CacheSlot,
    users: Vec<User>,
}

impl<R: RemoteDirectory> UserStore<R> {
    /// Create a store with an empty collection; call [`Self::load`] to populate it.
    pub fn new(remote: R, cache: CacheSlot) -> Self {
        Self {
            remote,
            cache,
            users: Vec::new(),
        }
    }

    /// The current collection, in insertion (= display) order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Populate the collection: cache slot first, remote list as fallback.
    ///
    /// A readable non-empty cache wins and the remote is never contacted. An
    /// unreadable or empty cache falls through to `GET /users`; on success the
    /// fetched collection is adopted and written through to the cache. On
    /// remote failure the collection stays empty and `StoreError::Load` is
    /// returned — an empty collection plus that error means "nothing loaded",
    /// not "zero users confirmed".
    pub async fn load(&mut self) -> Result<(), StoreError> {
        match self.cache.load() {
            Ok(Some(users)) if !users.is_empty() => {
                debug!(count = users.len(), "loaded users from cache slot");
                self.users = users;
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, path = %self.cache.path().display(), "cache slot unreadable, falling back to remote");
            }
        }

        let users = self.remote.list_users().await.map_err(StoreError::Load)?;
        if let Err(e) = self.cache.store(&users) {
            // The collection is already adopted; the slot is rewritten on the
            // next mutation.
            warn!(error = %e, "failed to seed cache slot after remote load");
        }
        debug!(count = users.len(), "loaded users from remote");
        self.users = users;
        Ok(())
    }

    /// Add a new user with a locally assigned id (`max(id) + 1`, or 1 when the
    /// collection is empty) and persist the collection.
    pub fn create_user(&mut self, draft: UserDraft) -> Result<&User, StoreError> {
        validate(&draft)?;
        if self.is_email_duplicate(&draft.email) {
            return Err(StoreError::DuplicateEmail(draft.email));
        }

        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        self.users.push(draft.into_user(id));
        if let Err(e) = self.cache.store(&self.users) {
            self.users.pop();
            return Err(StoreError::Create(e));
        }
        debug!(id, "created user");
        let last = self.users.len() - 1;
        Ok(&self.users[last])
    }

    /// Replace the record matching `user.id` and persist the collection.
    ///
    /// Full-replace merge policy: the incoming record entirely supersedes the
    /// stored one. Rejects an email already held by a different record, keeping
    /// the collection's email-uniqueness invariant.
    pub fn update_user(&mut self, user: User) -> Result<(), StoreError> {
        validate(&user.to_draft())?;
        let Some(pos) = self.users.iter().position(|u| u.id == user.id) else {
            return Err(StoreError::NotFound(user.id));
        };
        if self
            .users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let previous = std::mem::replace(&mut self.users[pos], user);
        if let Err(e) = self.cache.store(&self.users) {
            self.users[pos] = previous;
            return Err(StoreError::Update(e));
        }
        debug!(id = self.users[pos].id, "updated user");
        Ok(())
    }

    /// Remove the record matching `id` and persist the collection.
    ///
    /// Destructive-action confirmation belongs to the presentation layer; this
    /// operation is callable directly.
    pub fn delete_user(&mut self, id: u64) -> Result<User, StoreError> {
        let Some(pos) = self.users.iter().position(|u| u.id == id) else {
            return Err(StoreError::NotFound(id));
        };

        let removed = self.users.remove(pos);
        match self.cache.store(&self.users) {
            Ok(()) => {
                debug!(id, "deleted user");
                Ok(removed)
            }
            Err(e) => {
                self.users.insert(pos, removed);
                Err(StoreError::Delete(e))
            }
        }
    }

    /// True iff some record's email equals `email` exactly (case-sensitive).
    /// O(n) scan; the collection is expected to stay small.
    pub fn is_email_duplicate(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }
}
