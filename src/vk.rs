use log::debug;
use serde::Deserialize;

use crate::error::ApiError;

const VK_API_BASE: &str = "https://api.vk.com";
const VK_API_VERSION: &str = "5.131";

/// A single photo as returned by `photos.get`
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: i64,
    /// Upload timestamp, epoch seconds
    pub date: i64,
    pub likes: Likes,
    pub sizes: Vec<PhotoSize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Likes {
    pub count: u64,
}

/// One rendition of a photo. VK's size-class letters do not sort
/// reliably by pixel area, so consumers must compare width * height
/// rather than the label.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
    #[serde(rename = "type")]
    pub size_class: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    pub url: String,
}

/// VK wraps every reply in an envelope holding either `error` or
/// `response`.
#[derive(Debug, Deserialize)]
struct Envelope {
    error: Option<MethodError>,
    response: Option<PhotoPage>,
}

#[derive(Debug, Deserialize)]
struct MethodError {
    error_msg: String,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    #[serde(default)]
    items: Vec<Photo>,
}

/// Client for the VK photos API
pub struct VkClient {
    client: reqwest::Client,
    token: String,
    version: String,
    base_url: String,
}

impl VkClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            version: VK_API_VERSION.to_string(),
            base_url: VK_API_BASE.to_string(),
        }
    }

    /// Points the client at a different API host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches up to `count` photos from one of the owner's albums, with
    /// extended metadata (likes) and all size variants. Items are kept in
    /// the order VK returned them; no ordering is assumed or imposed.
    pub async fn get_photos(
        &self,
        owner_id: &str,
        album_id: &str,
        count: u32,
    ) -> Result<Vec<Photo>, ApiError> {
        let url = format!("{}/method/photos.get", self.base_url);
        let count = count.to_string();

        let envelope: Envelope = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.token.as_str()),
                ("v", self.version.as_str()),
                ("owner_id", owner_id),
                ("album_id", album_id),
                ("extended", "1"),
                ("photo_sizes", "1"),
                ("count", count.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = envelope.error {
            return Err(ApiError::Service {
                service: "VK",
                message: error.error_msg,
            });
        }

        let items = envelope.response.map(|page| page.items).unwrap_or_default();
        debug!("VK returned {} photos", items.len());
        Ok(items)
    }
}
