//! Thread and document endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use quip_core::constants::DEFAULT_RECENT_THREADS_COUNT;
use quip_core::error::QuipResult;

use crate::client::ApiClient;
use crate::form::{join_ids, FormFields};

/// Markup format of document content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Html,
    Markdown,
}

impl DocumentFormat {
    /// Wire value of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Html => "html",
            DocumentFormat::Markdown => "markdown",
        }
    }
}

/// Where an edit is applied within a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum EditLocation {
    /// Add content to the end of the document.
    #[default]
    Append = 0,
    /// Add content to the start of the document.
    Prepend = 1,
    /// Insert after the section named by `section_id`.
    AfterSection = 2,
    /// Insert before the section named by `section_id`.
    BeforeSection = 3,
    /// Replace the section named by `section_id`.
    ReplaceSection = 4,
    /// Remove the section named by `section_id`. Takes no content.
    DeleteSection = 5,
}

impl EditLocation {
    /// Convert an integer code to an EditLocation variant.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Append),
            1 => Some(Self::Prepend),
            2 => Some(Self::AfterSection),
            3 => Some(Self::BeforeSection),
            4 => Some(Self::ReplaceSection),
            5 => Some(Self::DeleteSection),
            _ => None,
        }
    }

    /// Get the integer code for this location.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

/// Options for creating a new document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDocumentOptions {
    pub format: DocumentFormat,
    /// Document title. Derived from the content by the platform when unset.
    pub title: Option<String>,
    /// Users and folders to share the document with.
    pub member_ids: Vec<String>,
}

/// Options for editing an existing document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDocumentOptions {
    pub location: EditLocation,
    /// Target section for the section-relative locations.
    pub section_id: Option<String>,
    pub format: DocumentFormat,
}

impl ApiClient {
    /// Get a single thread by id.
    pub async fn get_thread(&self, thread_id: &str) -> QuipResult<Value> {
        self.get_json(&format!("threads/{thread_id}")).await
    }

    /// Get several threads at once, keyed by thread id.
    pub async fn get_threads<S: AsRef<str>>(&self, thread_ids: &[S]) -> QuipResult<Value> {
        self.get_json(&format!("threads/?ids={}", join_ids(thread_ids)))
            .await
    }

    /// Get the most recently updated threads.
    ///
    /// `count` defaults to 10. `max_updated_usec` bounds the update time
    /// (microseconds since the epoch); when unset it is sent as an empty value.
    pub async fn get_recent_threads(
        &self,
        count: Option<u32>,
        max_updated_usec: Option<u64>,
    ) -> QuipResult<Value> {
        let count = count.unwrap_or(DEFAULT_RECENT_THREADS_COUNT);
        let max = max_updated_usec.map(|v| v.to_string()).unwrap_or_default();
        self.get_json(&format!(
            "threads/recent?count={count}&max_updated_usec={max}"
        ))
        .await
    }

    /// Create a new document from HTML or Markdown content.
    pub async fn create_document(
        &self,
        content: &str,
        options: &NewDocumentOptions,
    ) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("content", content)
            .text("format", options.format.as_str())
            .optional("title", options.title.as_deref())
            .list("member_ids", &options.member_ids);
        self.post_json("threads/new-document", &fields).await
    }

    /// Edit a document. `content` may be omitted for section deletion.
    pub async fn edit_document(
        &self,
        thread_id: &str,
        content: Option<&str>,
        options: &EditDocumentOptions,
    ) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("thread_id", thread_id)
            .optional("content", content)
            .number("location", i64::from(options.location.code()))
            .optional("section_id", options.section_id.as_deref())
            .text("format", options.format.as_str());
        self.post_json("threads/edit-document", &fields).await
    }

    /// Share a thread with additional users or folders.
    pub async fn add_thread_members<S: AsRef<str>>(
        &self,
        thread_id: &str,
        member_ids: &[S],
    ) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("thread_id", thread_id)
            .list("member_ids", member_ids);
        self.post_json("threads/add-members", &fields).await
    }

    /// Remove users or folders from a thread.
    pub async fn remove_thread_members<S: AsRef<str>>(
        &self,
        thread_id: &str,
        member_ids: &[S],
    ) -> QuipResult<Value> {
        let fields = FormFields::new()
            .text("thread_id", thread_id)
            .list("member_ids", member_ids);
        self.post_json("threads/remove-members", &fields).await
    }
}
