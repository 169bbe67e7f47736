//! The remote user resource: a REST endpoint exposing the standard CRUD surface.
//!
//! The store only consults [`RemoteDirectory::list_users`] (as a fallback data
//! source when the cache slot is empty); the app layer propagates local
//! mutations through the remaining operations best-effort.

use crate::error::RemoteError;
use crate::user::User;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Operations offered by the remote user resource.
#[async_trait]
pub trait RemoteDirectory: Send + Sync {
    /// `GET /users` — the full collection.
    async fn list_users(&self) -> Result<Vec<User>, RemoteError>;
    /// `POST /users` — returns the id the remote assigned to the new record.
    async fn create_user(&self, user: &User) -> Result<u64, RemoteError>;
    /// `PUT /users/{id}` — replace the record.
    async fn update_user(&self, user: &User) -> Result<(), RemoteError>;
    /// `DELETE /users/{id}` — no body.
    async fn delete_user(&self, id: u64) -> Result<(), RemoteError>;
}

/// HTTP-backed implementation of [`RemoteDirectory`].
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CreatedUser {
    id: u64,
}

impl HttpDirectory {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url_for(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(RemoteError::Status {
                status,
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl RemoteDirectory for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<User>, RemoteError> {
        let response = self.client.get(&self.base_url).send().await?;
        let users: Vec<User> = Self::check(response)?.json().await?;
        debug!(count = users.len(), "fetched remote user list");
        Ok(users)
    }

    async fn create_user(&self, user: &User) -> Result<u64, RemoteError> {
        let response = self.client.post(&self.base_url).json(user).send().await?;
        let created: CreatedUser = Self::check(response)?.json().await?;
        debug!(local_id = user.id, remote_id = created.id, "created remote user");
        Ok(created.id)
    }

    async fn update_user(&self, user: &User) -> Result<(), RemoteError> {
        let response = self
            .client
            .put(self.url_for(user.id))
            .json(user)
            .send()
            .await?;
        Self::check(response)?;
        debug!(id = user.id, "updated remote user");
        Ok(())
    }

    async fn delete_user(&self, id: u64) -> Result<(), RemoteError> {
        let response = self.client.delete(self.url_for(id)).send().await?;
        Self::check(response)?;
        debug!(id, "deleted remote user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let dir = HttpDirectory::new("https://example.com/users/").unwrap();
        assert_eq!(dir.url_for(3), "https://example.com/users/3");
    }
}
