//! Folder endpoints.

use serde_json::Value;

use quip_core::error::QuipResult;

use crate::client::ApiClient;
use crate::form::{join_ids, FormFields};

/// Options for creating a new folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFolderOptions {
    /// Folder to create the new folder in. The user's private folder when unset.
    pub parent_id: Option<String>,
    /// Folder color name, e.g. "manila" or "blue".
    pub color: Option<String>,
    /// Users to share the folder with.
    pub member_ids: Vec<String>,
}

impl ApiClient {
    /// Get a single folder by id.
    pub async fn get_folder(&self, folder_id: &str) -> QuipResult<Value> {
        self.get_json(&format!("folders/{folder_id}")).await
    }

    /// Get several folders at once, keyed by folder id.
    pub async fn get_folders<S: AsRef<str>>(&self, folder_ids: &[S]) -> QuipResult<Value> {
        self.get_json(&format!("folders/?ids={}", join_ids(folder_ids)))
            .await
    }

    /// Create a new folder.
    pub async fn create_folder(&self, title: &str, options: &NewFolderOptions) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("title", title)
            .optional("parent_id", options.parent_id.as_deref())
            .optional("color", options.color.as_deref())
            .list("member_ids", &options.member_ids);
        self.post_json("folders/new", &fields).await
    }

    /// Share a folder with additional users.
    pub async fn add_folder_members<S: AsRef<str>>(
        &self,
        folder_id: &str,
        member_ids: &[S],
    ) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("folder_id", folder_id)
            .list("member_ids", member_ids);
        self.post_json("folders/add-members", &fields).await
    }
}
