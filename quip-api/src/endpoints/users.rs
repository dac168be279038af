//! User endpoints.

use serde_json::Value;

use quip_core::error::QuipResult;

use crate::client::ApiClient;
use crate::form::join_ids;

impl ApiClient {
    /// Get a single user by id.
    pub async fn get_user(&self, user_id: &str) -> QuipResult<Value> {
        self.get_json(&format!("users/{user_id}")).await
    }

    /// Get several users at once, keyed by user id.
    pub async fn get_users<S: AsRef<str>>(&self, user_ids: &[S]) -> QuipResult<Value> {
        self.get_json(&format!("users/?ids={}", join_ids(user_ids)))
            .await
    }

    /// Get the user the access token belongs to.
    pub async fn get_authenticated_user(&self) -> QuipResult<Value> {
        self.get_json("users/current").await
    }
}
