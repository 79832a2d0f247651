//! On-disk data model shared by every stage of the finder.
//!
//! Field names mirror the JSON files the website reads, which is why most
//! structs rename to camelCase.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label stored in `metadata.source` of every daily file.
pub const RESULT_SOURCE: &str = "YouTube Data API";

/// A catalog entry. Read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Site {
    /// Location with surrounding whitespace removed; empty when absent.
    pub fn location_text(&self) -> &str {
        self.location.as_deref().map(str::trim).unwrap_or_default()
    }

    pub fn category_text(&self) -> &str {
        self.category.as_deref().map(str::trim).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
}

/// One discovered video with its view count at discovery time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub source: VideoPlatform,
    pub views: u64,
    /// Keys this crate does not model, carried through a rewrite untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoResult {
    pub fn youtube(
        video_id: impl Into<String>,
        title: impl Into<String>,
        channel_name: impl Into<String>,
        views: u64,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            channel_name: channel_name.into(),
            source: VideoPlatform::Youtube,
            views,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteVideoEntry {
    pub camping_site_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default)]
    pub videos: Vec<VideoResult>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteVideoEntry {
    pub fn new(
        camping_site_id: impl Into<String>,
        location_name: Option<String>,
        videos: Vec<VideoResult>,
    ) -> Self {
        Self {
            camping_site_id: camping_site_id.into(),
            location_name,
            videos,
            extra: Map::new(),
        }
    }
}

/// Ledger row for a site that ended a run with fewer than the target count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotEnoughEntry {
    pub site_id: String,
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetadata {
    pub date: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_locations: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contents of one `*-community-videos-YYYY-MM-DD.json` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResultFile {
    #[serde(default)]
    pub community_videos: Vec<SiteVideoEntry>,
    pub metadata: DailyMetadata,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DailyResultFile {
    pub fn empty(date: &str) -> Self {
        Self {
            community_videos: Vec::new(),
            metadata: DailyMetadata {
                date: date.to_string(),
                source: RESULT_SOURCE.to_string(),
                total_locations: None,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Appends new entries and refreshes `totalLocations`.
    pub fn append(&mut self, entries: impl IntoIterator<Item = SiteVideoEntry>) {
        self.community_videos.extend(entries);
        self.metadata.total_locations = Some(self.community_videos.len());
    }
}

/// Loose view of any result file, used only to collect covered site ids.
/// Entries from the aggregate file may carry fields we never model.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoverageFile {
    #[serde(default)]
    pub community_videos: Vec<CoverageEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoverageEntry {
    pub camping_site_id: String,
}
