//! REST client for the picture-of-the-day and rover-photo endpoints.
//!
//! Each call is a single attempt: no retry, no caching. The credential is
//! passed in at construction and only ever sent as a query parameter.

use crate::config::{ApiCredentials, TuiConfig};
use astroview_core::{PictureOfDay, RoverPhoto, RoverPhotoPage, MAX_ROVER_PHOTOS};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

pub const APOD_ENDPOINT: &str = "picture of the day";
pub const ROVER_ENDPOINT: &str = "rover photos";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Failed to fetch {endpoint}: HTTP status {status}")]
    HttpStatus { endpoint: &'static str, status: u16 },
    #[error("Malformed {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the api key.
        Self::Network(err.without_url())
    }
}

/// Source of astronomy data. Implemented by [`ApiClient`]; tests substitute
/// their own.
#[async_trait]
pub trait AstronomyApi: Send + Sync {
    async fn fetch_picture_of_day(&self, date: NaiveDate) -> Result<PictureOfDay, FetchError>;
    async fn fetch_rover_photos(&self, sol: u32) -> Result<Vec<RoverPhoto>, FetchError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    rover: String,
    credentials: ApiCredentials,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            rover: config.rover.to_ascii_lowercase(),
            credentials: config.credentials.clone(),
        })
    }

    pub async fn fetch_picture_of_day(&self, date: NaiveDate) -> Result<PictureOfDay, FetchError> {
        let date = date.format("%Y-%m-%d").to_string();
        let body = self
            .get_text(APOD_ENDPOINT, "/planetary/apod", &[("date", date.as_str())])
            .await?;
        parse_picture_of_day(&body)
    }

    /// Photos for `sol`, cut to the first [`MAX_ROVER_PHOTOS`].
    pub async fn fetch_rover_photos(&self, sol: u32) -> Result<Vec<RoverPhoto>, FetchError> {
        let path = format!("/mars-photos/api/v1/rovers/{}/photos", self.rover);
        let sol = sol.to_string();
        let body = self
            .get_text(ROVER_ENDPOINT, &path, &[("sol", sol.as_str())])
            .await?;
        parse_rover_photos(&body)
    }

    async fn get_text(
        &self,
        endpoint: &'static str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(endpoint, %url, ?params, "sending request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.credentials.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "upstream returned error status");
            return Err(FetchError::HttpStatus {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl AstronomyApi for ApiClient {
    async fn fetch_picture_of_day(&self, date: NaiveDate) -> Result<PictureOfDay, FetchError> {
        ApiClient::fetch_picture_of_day(self, date).await
    }

    async fn fetch_rover_photos(&self, sol: u32) -> Result<Vec<RoverPhoto>, FetchError> {
        ApiClient::fetch_rover_photos(self, sol).await
    }
}

pub fn parse_picture_of_day(body: &str) -> Result<PictureOfDay, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Parse {
        endpoint: APOD_ENDPOINT,
        source,
    })
}

pub fn parse_rover_photos(body: &str) -> Result<Vec<RoverPhoto>, FetchError> {
    let page: RoverPhotoPage = serde_json::from_str(body).map_err(|source| FetchError::Parse {
        endpoint: ROVER_ENDPOINT,
        source,
    })?;
    Ok(page.into_leading(MAX_ROVER_PHOTOS))
}
