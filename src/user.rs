//! User record types.
//!
//! [`User`] mirrors the remote resource's JSON shape; fields the endpoint sends
//! beyond the ones modeled here (address, company, website) are ignored on
//! deserialize and never round-trip.

use serde::{Deserialize, Serialize};

/// A stored user record. `id` is assigned by the store, never by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
}

/// A candidate record as entered in the form, before an id exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
}

impl UserDraft {
    /// Promote the draft to a full record under the given id.
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            username: self.username,
            phone: self.phone,
        }
    }
}

impl User {
    /// The editable fields of this record, without the id.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            phone: self.phone.clone(),
        }
    }
}
