//! Upstream payload schemas.
//!
//! Required fields are plain types so a body missing them fails to
//! deserialize; optional fields default to `None`. Unknown fields are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rover photo lists are cut down to this many entries.
pub const MAX_ROVER_PHOTOS: usize = 12;

// ============================================================================
// PICTURE OF THE DAY
// ============================================================================

/// Kind of media an APOD entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything else the upstream emits (interactive pages, embeds).
    #[serde(other)]
    Other,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other => "other",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Astronomy Picture of the Day entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureOfDay {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub url: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub service_version: Option<String>,
}

impl PictureOfDay {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Copyright holder with the stray whitespace upstream sometimes leaves in.
    pub fn credit(&self) -> Option<&str> {
        self.copyright
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

// ============================================================================
// MARS ROVER PHOTOS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverCamera {
    pub full_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverInfo {
    pub name: String,
}

/// A single photo taken by a rover camera on a given sol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPhoto {
    pub id: u64,
    pub img_src: String,
    pub camera: RoverCamera,
    pub rover: RoverInfo,
    pub sol: u32,
    pub earth_date: NaiveDate,
}

/// Response envelope of the rover photos endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPhotoPage {
    pub photos: Vec<RoverPhoto>,
}

impl RoverPhotoPage {
    /// Keep the first `limit` photos in upstream order and drop the rest.
    pub fn into_leading(self, limit: usize) -> Vec<RoverPhoto> {
        let mut photos = self.photos;
        photos.truncate(limit);
        photos
    }
}
