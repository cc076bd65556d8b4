//! HTTP client for the site's REST backend.
//!
//! All content endpoints return the same `{count, next, previous, results}`
//! envelope; `fetch_records` extracts the results and `fetch_sorted` layers
//! the stable created-at ordering some pages depend on. Submission endpoints
//! take JSON (subscription, contact message) or multipart form data (job
//! application with resume upload).
//!
//! This layer performs no retries: a failed read surfaces as `ApiError` and
//! the view layer decides how to degrade.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ApiError;
use crate::forms::{ContactMessage, EmailSubscription, JobApplication, APPLICATION_STATUS_SUBMITTED};
use crate::record::{sort_by_created_at, ListEnvelope, LocalizedRecord};

/// REST endpoint paths, relative to the API base URL.
pub mod endpoints {
    pub const SERVICES: &str = "/api/v1/services/";
    pub const FIELDS: &str = "/api/v1/fields/";
    pub const POSTS: &str = "/api/v1/posts/";
    pub const FAQS: &str = "/api/v1/faqs/";
    pub const JOBS: &str = "/api/v1/careers/jobs/";
    pub const PROJECTS: &str = "/api/v1/portfolio/projects/";
    pub const MEMBERS: &str = "/api/v1/members/";
    pub const FEEDBACKS: &str = "/api/v1/feedbacks/";

    pub const EMAIL_LISTS: &str = "/api/v1/email-lists/";
    pub const MESSAGES: &str = "/api/v1/messages/";
    pub const APPLICATIONS: &str = "/api/v1/careers/applications/";
}

/// Client over the content API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for a base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Build a client from application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: normalize_base_url(config.api_base_url.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ==================== Reads ====================

    /// GET one envelope page from a content endpoint.
    pub async fn fetch_envelope(
        &self,
        path: &str,
    ) -> Result<ListEnvelope<LocalizedRecord>, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status,
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let envelope: ListEnvelope<LocalizedRecord> =
            serde_json::from_str(&body).map_err(|source| ApiError::Parse {
                endpoint: path.to_string(),
                source,
            })?;

        debug!(
            "GET {} -> {} of {} records",
            path,
            envelope.results.len(),
            envelope.count
        );
        Ok(envelope)
    }

    /// GET a content endpoint and extract its results.
    pub async fn fetch_records(&self, path: &str) -> Result<Vec<LocalizedRecord>, ApiError> {
        Ok(self.fetch_envelope(path).await?.results)
    }

    /// GET a content endpoint and return its results stably sorted by
    /// creation time ascending.
    pub async fn fetch_sorted(&self, path: &str) -> Result<Vec<LocalizedRecord>, ApiError> {
        Ok(sort_by_created_at(self.fetch_records(path).await?))
    }

    /// The `fields/` collection, sorted by creation time. Pages address
    /// individual entries positionally, so the ordering matters here.
    pub async fn fields(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_sorted(endpoints::FIELDS).await
    }

    pub async fn services(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::SERVICES).await
    }

    pub async fn posts(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::POSTS).await
    }

    pub async fn faqs(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::FAQS).await
    }

    pub async fn jobs(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::JOBS).await
    }

    pub async fn projects(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::PROJECTS).await
    }

    pub async fn members(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::MEMBERS).await
    }

    pub async fn feedbacks(&self) -> Result<Vec<LocalizedRecord>, ApiError> {
        self.fetch_records(endpoints::FEEDBACKS).await
    }

    // ==================== Submissions ====================

    /// POST a newsletter subscription as JSON.
    ///
    /// Borrows the payload: on rejection the caller still holds the form
    /// value and can retry.
    pub async fn subscribe(
        &self,
        subscription: &EmailSubscription,
    ) -> Result<LocalizedRecord, ApiError> {
        let record = self
            .post_json(endpoints::EMAIL_LISTS, subscription)
            .await?;
        info!("Subscribed {} to the email list", subscription.email);
        Ok(record)
    }

    /// POST a contact form message as JSON.
    pub async fn send_message(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.post_json(endpoints::MESSAGES, message).await?;
        info!("Contact message sent for {}", message.email);
        Ok(())
    }

    /// POST a job application as multipart form data, attaching the resume
    /// file when one was provided.
    pub async fn submit_application(
        &self,
        application: &JobApplication,
    ) -> Result<LocalizedRecord, ApiError> {
        let path = endpoints::APPLICATIONS;

        let mut form = reqwest::multipart::Form::new()
            .text("notes", application.notes.clone())
            .text("full_name", application.full_name.clone())
            .text("description", application.description.clone())
            .text("phone_number", application.phone_number.clone())
            .text("email", application.email.clone())
            .text("status", APPLICATION_STATUS_SUBMITTED)
            .text("job_posting", application.job_posting.clone());

        if let Some(resume_path) = &application.resume {
            let bytes =
                tokio::fs::read(resume_path)
                    .await
                    .map_err(|source| ApiError::Attachment {
                        path: resume_path.display().to_string(),
                        source,
                    })?;
            let file_name = resume_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "resume".to_string());
            form = form.part(
                "resume",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );
        }

        let response = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let record = self.read_json_response(path, response).await?;
        info!(
            "Application submitted for job posting {}",
            application.job_posting
        );
        Ok(record)
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<LocalizedRecord, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        self.read_json_response(path, response).await
    }

    async fn read_json_response(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<LocalizedRecord, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status,
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ApiError::Parse {
            endpoint: path.to_string(),
            source,
        })
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}
