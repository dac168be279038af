//! Message endpoints.

use serde_json::Value;

use quip_core::error::{QuipError, QuipResult};

use crate::client::ApiClient;
use crate::form::FormFields;

impl ApiClient {
    /// Get the messages of a thread, in the order the platform returns them.
    pub async fn get_messages(&self, thread_id: &str) -> QuipResult<Vec<Value>> {
        match self.get_json(&format!("messages/{thread_id}")).await? {
            Value::Array(messages) => Ok(messages),
            other => Err(QuipError::Decode {
                message: "expected a JSON array of messages".into(),
                body: other.to_string(),
            }),
        }
    }

    /// Post a message to a thread.
    pub async fn add_message(&self, thread_id: &str, content: &str) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("thread_id", thread_id)
            .text("content", content);
        self.post_json("messages/new", &fields).await
    }
}
