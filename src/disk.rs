use log::debug;
use serde::Deserialize;

use crate::error::ApiError;

const DISK_API_BASE: &str = "https://cloud-api.yandex.net/v1/disk";

/// Error body the Disk API attaches to non-2xx replies
#[derive(Debug, Deserialize)]
struct DiskErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    description: String,
}

/// Client for the Yandex.Disk REST API
pub struct DiskClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl DiskClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: DISK_API_BASE.to_string(),
        }
    }

    /// Points the client at a different API host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.token)
    }

    /// Creates a folder at `path`. A folder that already exists (HTTP
    /// 409) counts as success, so the call can be repeated across runs.
    pub async fn create_folder(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}/resources", self.base_url);
        let response = self
            .client
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .query(&[("path", path)])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::CONFLICT {
            debug!("folder {path} already exists on Disk");
            return Ok(());
        }
        if status.is_success() {
            debug!("created folder {path} on Disk");
            return Ok(());
        }

        Err(service_error(response).await)
    }

    /// Asks Disk to fetch `source_url` server-side and store the result
    /// at `path`. The upload is considered complete once the service
    /// accepts the transfer; no bytes pass through this process and no
    /// read-back verification is done.
    pub async fn upload_from_url(&self, path: &str, source_url: &str) -> Result<(), ApiError> {
        let url = format!("{}/resources/upload", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .query(&[("path", path), ("url", source_url)])
            .send()
            .await?;

        if response.status().is_success() {
            debug!("Disk accepted upload to {path}");
            return Ok(());
        }

        Err(service_error(response).await)
    }
}

/// Turns a non-2xx Disk reply into a service error, preferring the
/// human-readable `message` the API ships in its error body.
async fn service_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<DiskErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        Ok(body) if !body.description.is_empty() => body.description,
        _ => format!("unexpected status {status}"),
    };

    ApiError::Service {
        service: "Disk",
        message,
    }
}
