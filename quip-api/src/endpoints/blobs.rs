//! Blob endpoints.

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use quip_core::error::QuipResult;

use crate::client::ApiClient;

impl ApiClient {
    /// Download a blob attached to a thread. The bytes are returned unmodified.
    pub async fn get_blob(&self, thread_id: &str, blob_id: &str) -> QuipResult<Vec<u8>> {
        self.get_raw(&format!("blob/{thread_id}/{blob_id}")).await
    }

    /// Upload a blob to a thread.
    ///
    /// The payload is sent as a binary multipart part, never text-encoded,
    /// so arbitrary bytes survive the upload.
    pub async fn add_blob(&self, thread_id: &str, blob: impl Into<Vec<u8>>) -> QuipResult<Value> {
        let form = Form::new()
            .text("thread_id", thread_id.to_string())
            .part("blob", Part::bytes(blob.into()).file_name("blob"));
        self.post_multipart_json("blob", form).await
    }
}
