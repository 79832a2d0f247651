//! YouTube Data API client.
//!
//! Every search is two calls: `search.list` for candidates, then one batched
//! `videos.list` for view counts. A 403 from either call means the key's
//! quota is gone; that is reported as [`SearchOutcome::QuotaExhausted`]
//! rather than as an error so callers can stop cleanly.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::model::VideoResult;
use crate::query::SearchRequest;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const QUOTA_STATUS: u16 = 403;
const VIDEO_DURATION: &str = "medium";

/// Result of one search. `QuotaExhausted` is distinct from an empty list:
/// it means no further calls should be made this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Videos(Vec<VideoResult>),
    QuotaExhausted { message: String },
}

/// Seam between the pipeline and the remote service.
pub trait VideoSearch {
    /// Runs one search plus its statistics lookup. Results carry raw view
    /// counts; no threshold or ordering is applied here.
    fn search(&self, request: &SearchRequest) -> Result<SearchOutcome>;
}

pub struct YouTubeClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn search_list(&self, request: &SearchRequest) -> Result<Fetched<SearchListResponse>> {
        debug!(query = %request.query, region = %request.locale.region_code, "search.list");
        let call = self
            .agent
            .get(&format!("{}/search", self.base_url))
            .query("part", "snippet")
            .query("q", &request.query)
            .query("type", "video")
            .query("maxResults", &request.max_results.to_string())
            .query("relevanceLanguage", &request.locale.relevance_language)
            .query("regionCode", &request.locale.region_code)
            .query("videoDuration", VIDEO_DURATION)
            .query("key", &self.api_key);
        fetch_json(call, "search.list")
    }

    fn video_statistics(&self, video_ids: &[String]) -> Result<Fetched<VideoListResponse>> {
        debug!(count = video_ids.len(), "videos.list");
        let call = self
            .agent
            .get(&format!("{}/videos", self.base_url))
            .query("part", "statistics")
            .query("id", &video_ids.join(","))
            .query("key", &self.api_key);
        fetch_json(call, "videos.list")
    }
}

impl VideoSearch for YouTubeClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let search = match self.search_list(request)? {
            Fetched::Body(body) => body,
            Fetched::Forbidden(detail) => {
                warn!(query = %request.query, "search.list returned 403");
                return Ok(SearchOutcome::QuotaExhausted {
                    message: format!("403: {detail}"),
                });
            }
        };

        // Channel and playlist hits carry no videoId.
        let hits: Vec<(String, Snippet)> = search
            .items
            .into_iter()
            .filter_map(|item| Some((item.id.video_id?, item.snippet)))
            .collect();
        if hits.is_empty() {
            return Ok(SearchOutcome::Videos(Vec::new()));
        }

        let ids: Vec<String> = hits.iter().map(|(id, _)| id.clone()).collect();
        let stats = match self.video_statistics(&ids)? {
            Fetched::Body(body) => body,
            Fetched::Forbidden(_) => {
                warn!("videos.list returned 403");
                return Ok(SearchOutcome::QuotaExhausted {
                    message: "YouTube API quota exceeded. Stopping.".to_string(),
                });
            }
        };

        Ok(SearchOutcome::Videos(merge_statistics(hits, stats)))
    }
}

enum Fetched<T> {
    Body(T),
    Forbidden(String),
}

fn fetch_json<T: DeserializeOwned>(call: ureq::Request, label: &str) -> Result<Fetched<T>> {
    match call.call() {
        Ok(response) => {
            let body = response
                .into_json::<T>()
                .with_context(|| format!("decoding {label} response"))?;
            Ok(Fetched::Body(body))
        }
        Err(ureq::Error::Status(QUOTA_STATUS, response)) => {
            Ok(Fetched::Forbidden(response.into_string().unwrap_or_default()))
        }
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            bail!("{label} failed with HTTP {status}: {body}")
        }
        Err(err) => Err(err).with_context(|| format!("calling {label}")),
    }
}

fn merge_statistics(hits: Vec<(String, Snippet)>, stats: VideoListResponse) -> Vec<VideoResult> {
    let views: HashMap<String, u64> = stats
        .items
        .into_iter()
        .map(|item| {
            let count = item
                .statistics
                .view_count
                .as_ref()
                .map(ViewCount::value)
                .unwrap_or(0);
            (item.id, count)
        })
        .collect();

    hits.into_iter()
        .map(|(video_id, snippet)| {
            let count = views.get(&video_id).copied().unwrap_or(0);
            VideoResult::youtube(video_id, snippet.title, snippet.channel_title, count)
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: SearchItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoStatsItem>,
}

#[derive(Debug, Deserialize)]
struct VideoStatsItem {
    id: String,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    #[serde(default)]
    view_count: Option<ViewCount>,
}

/// The API sends counts as decimal strings; stubs and older dumps sometimes
/// use plain numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ViewCount {
    Number(u64),
    Text(String),
}

impl ViewCount {
    fn value(&self) -> u64 {
        match self {
            ViewCount::Number(value) => *value,
            ViewCount::Text(value) => value.trim().parse().unwrap_or(0),
        }
    }
}
