//! HTTP client for the studio site backend.
//!
//! One method per endpoint. Responses are plain JSON collections and
//! objects; non-success statuses surface as [`BackendError::Api`] carrying
//! the status code and raw body text.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::BackendError;
use crate::config::BackendConfig;
use crate::inbox::MessageRecord;

/// HTTP connect timeout for the reqwest client.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// HTTP request timeout for normal operations.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the studio backend HTTP API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

/// A portfolio project as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Database id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown on the portfolio grid.
    #[serde(default)]
    pub description: String,
    /// Category label (branding, web, motion, …).
    #[serde(default)]
    pub category: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// External case-study link.
    #[serde(default)]
    pub link: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Fields the admin supplies when creating or replacing a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    /// Display title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Category label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// External case-study link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl From<Project> for ProjectDraft {
    fn from(project: Project) -> Self {
        Self {
            title: project.title,
            description: project.description,
            category: project.category,
            image_url: project.image_url,
            link: project.link,
        }
    }
}

impl BackendClient {
    /// Create a client for the given base URL with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidBaseUrl`] when the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_timeouts(base_url, CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS)
    }

    /// Create a client from configuration, honoring configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidBaseUrl`] when the URL does not parse.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        Self::with_timeouts(
            &config.base_url,
            config.connect_timeout_secs,
            config.request_timeout_secs,
        )
    }

    /// Create a client with explicit connect/request timeouts in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidBaseUrl`] when the URL does not parse.
    pub fn with_timeouts(
        base_url: &str,
        connect_secs: u64,
        request_secs: u64,
    ) -> Result<Self, BackendError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| BackendError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(connect_secs))
            .timeout(std::time::Duration::from_secs(request_secs))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to build HTTP client with timeouts, using default");
                reqwest::Client::default()
            });
        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend is up. Network errors count as unhealthy.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Fetch the contact inbox, ordered as served (newest first).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] on transport or decode failure, or
    /// [`BackendError::Api`] when the backend rejects the request.
    pub async fn list_messages(&self, limit: usize) -> Result<Vec<MessageRecord>, BackendError> {
        let url = format!("{}/api/messages?limit={limit}", self.base_url);
        let resp = check_response(self.client.get(&url).send().await?).await?;
        let records: Vec<MessageRecord> = resp.json().await?;
        debug!(count = records.len(), "fetched inbox listing");
        Ok(records)
    }

    /// Mark a submission read.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] when no submission has the id.
    pub async fn mark_read(&self, id: &str) -> Result<(), BackendError> {
        let url = format!("{}/api/messages/{id}/read", self.base_url);
        let resp = self.client.put(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(id.to_owned()));
        }
        check_response(resp).await?;
        debug!(id, "submission marked read");
        Ok(())
    }

    /// Delete a submission.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] when no submission has the id.
    pub async fn delete_message(&self, id: &str) -> Result<(), BackendError> {
        let url = format!("{}/api/messages/{id}", self.base_url);
        let resp = self.client.delete(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(id.to_owned()));
        }
        check_response(resp).await?;
        debug!(id, "submission deleted");
        Ok(())
    }

    /// Fetch all portfolio projects.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] or [`BackendError::Api`] as for
    /// [`Self::list_messages`].
    pub async fn list_projects(&self) -> Result<Vec<Project>, BackendError> {
        let url = format!("{}/api/projects", self.base_url);
        let resp = check_response(self.client.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Fetch one project by id.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] when no project has the id.
    pub async fn get_project(&self, id: &str) -> Result<Project, BackendError> {
        let url = format!("{}/api/projects/{id}", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(id.to_owned()));
        }
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Create a project, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Api`] when the backend rejects the draft.
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, BackendError> {
        let url = format!("{}/api/projects", self.base_url);
        let resp = check_response(self.client.post(&url).json(draft).send().await?).await?;
        let created: Project = resp.json().await?;
        debug!(id = %created.id, "project created");
        Ok(created)
    }

    /// Replace a project's fields, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] when no project has the id.
    pub async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, BackendError> {
        let url = format!("{}/api/projects/{id}", self.base_url);
        let resp = self.client.put(&url).json(draft).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(id.to_owned()));
        }
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::NotFound`] when no project has the id.
    pub async fn delete_project(&self, id: &str) -> Result<(), BackendError> {
        let url = format!("{}/api/projects/{id}", self.base_url);
        let resp = self.client.delete(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(id.to_owned()));
        }
        check_response(resp).await?;
        debug!(id, "project deleted");
        Ok(())
    }
}

/// Surface a non-success response as [`BackendError::Api`] with the body
/// text; success responses pass through.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let detail = resp.text().await.unwrap_or_default();
    warn!(%status, "backend request failed: {detail}");
    Err(BackendError::Api {
        status: status.as_u16(),
        detail,
    })
}
