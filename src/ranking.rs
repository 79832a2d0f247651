//! Filtering and ordering of search results.

use std::collections::HashSet;

use crate::model::VideoResult;
use crate::profile::RegionProfile;

/// Rules applied to every batch of search results for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker {
    pub view_threshold: u64,
    /// Lowercased substring; matching channels are dropped.
    excluded_channel: Option<String>,
    pub max_videos: usize,
}

impl Ranker {
    pub fn new(view_threshold: u64, excluded_channel: Option<&str>, max_videos: usize) -> Self {
        Self {
            view_threshold,
            excluded_channel: excluded_channel
                .map(|name| name.trim().to_lowercase())
                .filter(|name| !name.is_empty()),
            max_videos,
        }
    }

    pub fn for_profile(profile: &RegionProfile) -> Self {
        Self::new(
            profile.view_threshold,
            profile.excluded_channel.as_deref(),
            profile.target_videos,
        )
    }

    pub fn is_excluded(&self, video: &VideoResult) -> bool {
        self.excluded_channel
            .as_deref()
            .is_some_and(|needle| video.channel_name.to_lowercase().contains(needle))
    }

    /// Keeps the best candidates not already in `accumulated`: excluded
    /// channels and low-view videos are dropped, duplicates removed, the rest
    /// sorted by views descending and cut to `max_videos`.
    pub fn select(
        &self,
        candidates: Vec<VideoResult>,
        accumulated: &[VideoResult],
    ) -> Vec<VideoResult> {
        let mut seen: HashSet<String> = accumulated
            .iter()
            .map(|video| video.video_id.clone())
            .collect();
        let mut kept: Vec<VideoResult> = candidates
            .into_iter()
            .filter(|video| !self.is_excluded(video))
            .filter(|video| video.views >= self.view_threshold)
            .filter(|video| seen.insert(video.video_id.clone()))
            .collect();
        sort_by_views(&mut kept);
        kept.truncate(self.max_videos);
        kept
    }

    /// Final ordering for a site once every query stage has run.
    pub fn finish(&self, mut accumulated: Vec<VideoResult>) -> Vec<VideoResult> {
        sort_by_views(&mut accumulated);
        accumulated.truncate(self.max_videos);
        accumulated
    }
}

/// Stable, so equal view counts keep their discovery order.
fn sort_by_views(videos: &mut [VideoResult]) {
    videos.sort_by(|a, b| b.views.cmp(&a.views));
}
