//! The run loop: pick pending sites, search for each, classify, persist.
//!
//! Console output goes through the supplied writer so a run can be captured
//! verbatim. Diagnostics go to `tracing`.

use std::io::Write;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::catalog::{load_covered_ids, load_sites, pending_sites};
use crate::layout::DataPaths;
use crate::model::{NotEnoughEntry, Site, SiteVideoEntry, VideoResult};
use crate::profile::RegionProfile;
use crate::query::plan_queries;
use crate::ranking::Ranker;
use crate::writer::{load_daily_file, persist_run};
use crate::youtube::{SearchOutcome, VideoSearch};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub limit: usize,
    pub dry_run: bool,
}

/// How a site ended up after all its queries ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteClass {
    Satisfied,
    Partial,
    Empty,
}

impl SiteClass {
    pub fn of(found: usize, target: usize) -> Self {
        match found {
            0 => SiteClass::Empty,
            n if n >= target => SiteClass::Satisfied,
            _ => SiteClass::Partial,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sites attempted, including the one during which the quota ran out.
    pub processed: usize,
    pub satisfied: usize,
    pub partial: usize,
    pub empty: usize,
    pub total_videos: usize,
    pub quota_exhausted: bool,
    pub daily_file: Option<PathBuf>,
    pub ledger_file: Option<PathBuf>,
    pub entries_in_daily_file: usize,
}

/// Runs the site's query plan until enough videos are kept, merging each
/// stage into what earlier stages found.
pub fn discover_site_videos<S, W>(
    site: &Site,
    profile: &RegionProfile,
    ranker: &Ranker,
    search: &S,
    out: &mut W,
) -> Result<SearchOutcome>
where
    S: VideoSearch + ?Sized,
    W: Write,
{
    let mut accumulated: Vec<VideoResult> = Vec::new();

    for planned in plan_queries(site, profile) {
        if planned.stage.is_fallback() && accumulated.len() >= profile.fallback_minimum {
            break;
        }
        debug!(site = %site.id, stage = ?planned.stage, query = %planned.request.query, "searching");
        match search.search(&planned.request)? {
            SearchOutcome::Videos(candidates) => {
                let kept = ranker.select(candidates, &accumulated);
                accumulated.extend(kept);
            }
            SearchOutcome::QuotaExhausted { message } => {
                writeln!(out, "  [ERROR] {message}")?;
                return Ok(SearchOutcome::QuotaExhausted { message });
            }
        }
    }

    Ok(SearchOutcome::Videos(ranker.finish(accumulated)))
}

/// One full invocation against the data directory in `paths`.
pub fn run<S, W>(
    profile: &RegionProfile,
    search: &S,
    paths: &DataPaths,
    options: RunOptions,
    out: &mut W,
) -> Result<RunSummary>
where
    S: VideoSearch + ?Sized,
    W: Write,
{
    writeln!(out, "Loading local data files...")?;
    let sites = load_sites(&paths.catalog, &paths.catalog_key)?;
    let covered = load_covered_ids(paths)?;
    let mut daily = load_daily_file(&paths.daily, &paths.date)?;
    writeln!(out, "  Loaded {} {}", sites.len(), profile.site_noun)?;
    writeln!(out, "  {} sites already have community videos", covered.len())?;
    writeln!(
        out,
        "  Today's file has {} entries so far",
        daily.community_videos.len()
    )?;

    let pending = pending_sites(&sites, &covered);
    writeln!(
        out,
        "  {} sites still need {}.\n",
        pending.len(),
        profile.wanted_noun
    )?;

    let mut summary = RunSummary {
        entries_in_daily_file: daily.community_videos.len(),
        ..RunSummary::default()
    };

    if pending.is_empty() {
        writeln!(out, "All sites already have community videos. Nothing to do.")?;
        return Ok(summary);
    }

    let batch: Vec<&Site> = pending.iter().take(options.limit).collect();
    writeln!(
        out,
        "Processing {} sites (limit: {})...",
        batch.len(),
        options.limit
    )?;
    if options.dry_run {
        writeln!(out, "[DRY RUN] No data will be written to file.\n")?;
    }

    let ranker = Ranker::for_profile(profile);
    let mut new_entries: Vec<SiteVideoEntry> = Vec::new();
    let mut not_enough: Vec<NotEnoughEntry> = Vec::new();

    for (index, site) in batch.iter().enumerate() {
        if index > 0 && !profile.site_delay.is_zero() {
            thread::sleep(profile.site_delay);
        }

        writeln!(
            out,
            "[{}/{}] {}",
            index + 1,
            batch.len(),
            progress_label(site, profile)
        )?;
        summary.processed = index + 1;

        let videos = match discover_site_videos(site, profile, &ranker, search, out)
            .with_context(|| format!("searching videos for site {}", site.id))?
        {
            SearchOutcome::Videos(videos) => videos,
            SearchOutcome::QuotaExhausted { .. } => {
                warn!(site = %site.id, "quota exhausted, stopping run");
                writeln!(out, "\nQuota exhausted. Stopping early.")?;
                summary.quota_exhausted = true;
                break;
            }
        };

        let class = SiteClass::of(videos.len(), profile.target_videos);
        if class == SiteClass::Empty {
            writeln!(out, "  No suitable videos found.")?;
            not_enough.push(shortfall(site, 0));
            summary.empty += 1;
            continue;
        }

        let status = if class == SiteClass::Satisfied {
            "OK"
        } else {
            "NOT ENOUGH"
        };
        writeln!(out, "  Found {} videos: [{status}]", videos.len())?;
        for video in &videos {
            writeln!(
                out,
                "    - {} ({} views) [{}]",
                clip_title(&video.title, profile.title_width),
                group_thousands(video.views),
                video.video_id
            )?;
        }

        if class == SiteClass::Partial {
            not_enough.push(shortfall(site, videos.len()));
            summary.partial += 1;
        } else {
            summary.satisfied += 1;
        }
        summary.total_videos += videos.len();
        new_entries.push(SiteVideoEntry::new(
            site.id.clone(),
            profile.record_location_name.then(|| location_name(site)),
            videos,
        ));
    }

    let report = persist_run(paths, &mut daily, new_entries, &not_enough, options.dry_run)?;
    summary.daily_file = report.daily_file;
    summary.ledger_file = report.ledger_file;
    summary.entries_in_daily_file = daily.community_videos.len();

    print_summary(out, &summary, paths, options.dry_run)?;
    Ok(summary)
}

fn print_summary<W: Write>(
    out: &mut W,
    summary: &RunSummary,
    paths: &DataPaths,
    dry_run: bool,
) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Sites processed: {}", summary.processed)?;
    writeln!(out, "  Sites with 5+ videos: {}", summary.satisfied)?;
    writeln!(out, "  Sites with <5 videos (not enough): {}", summary.partial)?;
    writeln!(out, "  Sites with 0 videos: {}", summary.empty)?;
    writeln!(out, "  Total videos found: {}", summary.total_videos)?;
    if dry_run {
        writeln!(out, "  [DRY RUN] No data was written.")?;
    } else if let Some(daily) = &summary.daily_file {
        writeln!(out, "  Written to: {}", daily.display())?;
        writeln!(
            out,
            "  Total entries in today's file: {}",
            summary.entries_in_daily_file
        )?;
        writeln!(out, "  'Not enough' list: {}", paths.ledger.display())?;
    }
    Ok(())
}

fn progress_label(site: &Site, profile: &RegionProfile) -> String {
    let mut label = format!("{} ({})", site.title, site.location_text());
    if profile.show_category {
        label.push_str(&format!(" [{}]", site.category_text()));
    }
    label
}

fn shortfall(site: &Site, count: usize) -> NotEnoughEntry {
    NotEnoughEntry {
        site_id: site.id.clone(),
        title: site.title.clone(),
        count,
    }
}

fn location_name(site: &Site) -> String {
    match site.location_text() {
        "" => site.title.clone(),
        location => format!("{}, {location}", site.title),
    }
}

/// Cuts to `width` characters and marks the cut with `...`.
pub fn clip_title(title: &str, width: Option<usize>) -> String {
    match width {
        Some(width) if title.chars().count() > width => {
            let clipped: String = title.chars().take(width).collect();
            format!("{clipped}...")
        }
        _ => title.to_string(),
    }
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DailyResultFile;
    use crate::query::SearchRequest;
    use crate::writer::load_ledger;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    /// Answers by exact query text; unknown queries return no videos.
    #[derive(Default)]
    struct ScriptedSearch {
        answers: HashMap<String, SearchOutcome>,
        calls: RefCell<Vec<SearchRequest>>,
    }

    impl ScriptedSearch {
        fn answer(mut self, query: &str, videos: Vec<VideoResult>) -> Self {
            self.answers
                .insert(query.to_string(), SearchOutcome::Videos(videos));
            self
        }

        fn exhaust(mut self, query: &str) -> Self {
            self.answers.insert(
                query.to_string(),
                SearchOutcome::QuotaExhausted {
                    message: "403: quotaExceeded".into(),
                },
            );
            self
        }

        fn queries(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|request| request.query.clone())
                .collect()
        }
    }

    impl VideoSearch for ScriptedSearch {
        fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
            self.calls.borrow_mut().push(request.clone());
            Ok(self
                .answers
                .get(&request.query)
                .cloned()
                .unwrap_or(SearchOutcome::Videos(Vec::new())))
        }
    }

    fn videos(prefix: &str, count: usize, views: u64) -> Vec<VideoResult> {
        (0..count)
            .map(|n| {
                VideoResult::youtube(
                    format!("{prefix}{n}"),
                    format!("{prefix} video {n}"),
                    "Someone",
                    views + n as u64,
                )
            })
            .collect()
    }

    fn quick(mut profile: RegionProfile) -> RegionProfile {
        profile.site_delay = Duration::ZERO;
        profile
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn setup(dir: &Path, profile: &RegionProfile, sites: serde_json::Value) -> Result<DataPaths> {
        let paths = DataPaths::resolve(dir, &profile.files, day());
        let mut catalog = serde_json::Map::new();
        catalog.insert(profile.files.catalog_key.clone(), sites);
        fs::write(&paths.catalog, serde_json::to_vec(&catalog)?)?;
        Ok(paths)
    }

    fn run_captured(
        profile: &RegionProfile,
        search: &ScriptedSearch,
        paths: &DataPaths,
        limit: usize,
        dry_run: bool,
    ) -> Result<(RunSummary, String)> {
        let mut out = Vec::new();
        let summary = run(profile, search, paths, RunOptions { limit, dry_run }, &mut out)?;
        Ok((summary, String::from_utf8(out)?))
    }

    fn stored(paths: &DataPaths) -> Result<DailyResultFile> {
        Ok(serde_json::from_str(&fs::read_to_string(&paths.daily)?)?)
    }

    #[test]
    fn limit_processes_only_the_first_pending_site() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::victoria());
        let paths = setup(
            dir.path(),
            &profile,
            json!([
                {"id": "1", "title": "A", "location": "Foo"},
                {"id": "2", "title": "B", "location": "Bar"}
            ]),
        )?;
        let search = ScriptedSearch::default().answer("\"A\" camping victoria", videos("a", 5, 500));

        let (summary, output) = run_captured(&profile, &search, &paths, 1, false)?;

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.satisfied, 1);
        assert_eq!(search.queries(), vec!["\"A\" camping victoria"]);
        let daily = stored(&paths)?;
        assert_eq!(daily.community_videos.len(), 1);
        assert_eq!(daily.community_videos[0].camping_site_id, "1");
        assert_eq!(daily.community_videos[0].location_name, None);
        assert!(load_ledger(&paths.ledger)?.iter().all(|e| e.site_id != "2"));
        assert!(output.contains("  2 sites still need videos.\n"));
        assert!(output.contains("[1/1] A (Foo)"));
        assert!(output.contains("Found 5 videos: [OK]"));
        assert!(output.contains("(504 views) [a4]"));
        Ok(())
    }

    #[test]
    fn second_run_same_day_appends_to_daily_file() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::victoria());
        let paths = setup(
            dir.path(),
            &profile,
            json!([
                {"id": "1", "title": "A", "location": "Foo"},
                {"id": "2", "title": "B", "location": "Bar"}
            ]),
        )?;
        let search = ScriptedSearch::default()
            .answer("\"A\" camping victoria", videos("a", 5, 500))
            .answer("\"B\" camping victoria", videos("b", 5, 700));

        run_captured(&profile, &search, &paths, 1, false)?;
        let (summary, output) = run_captured(&profile, &search, &paths, 1, false)?;

        assert!(output.contains("1 sites already have community videos"));
        assert!(output.contains("Today's file has 1 entries so far"));
        assert_eq!(summary.entries_in_daily_file, 2);
        let daily = stored(&paths)?;
        let ids: Vec<_> = daily
            .community_videos
            .iter()
            .map(|e| e.camping_site_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(daily.metadata.total_locations, Some(2));

        let (third, output) = run_captured(&profile, &search, &paths, 5, false)?;
        assert_eq!(third.processed, 0);
        assert!(output.contains("Nothing to do."));
        Ok(())
    }

    #[test]
    fn quota_exhaustion_stops_the_run_and_keeps_earlier_sites() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::victoria());
        let sites: Vec<_> = (1..=5)
            .map(|n| json!({"id": n.to_string(), "title": format!("S{n}")}))
            .collect();
        let paths = setup(dir.path(), &profile, json!(sites))?;
        let search = ScriptedSearch::default()
            .answer("\"S1\" camping victoria", videos("one", 5, 1000))
            .answer("\"S2\" camping victoria", videos("two", 3, 1000))
            .exhaust("\"S3\" camping victoria");

        let (summary, output) = run_captured(&profile, &search, &paths, 10, false)?;

        assert!(summary.quota_exhausted);
        assert_eq!(summary.processed, 3);
        assert!(output.contains("  [ERROR] 403: quotaExceeded"));
        assert!(output.contains("Quota exhausted. Stopping early."));
        assert!(!search.queries().iter().any(|q| q.contains("S4") || q.contains("S5")));

        let daily = stored(&paths)?;
        let ids: Vec<_> = daily
            .community_videos
            .iter()
            .map(|e| e.camping_site_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        let ledger = load_ledger(&paths.ledger)?;
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].site_id, "2");
        assert_eq!(ledger[0].count, 3);
        Ok(())
    }

    #[test]
    fn quota_during_a_fallback_discards_the_site() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::victoria());
        let paths = setup(
            dir.path(),
            &profile,
            json!([
                {"id": "1", "title": "A", "location": "Foo"},
                {"id": "2", "title": "B", "location": "Bar"}
            ]),
        )?;
        let search = ScriptedSearch::default()
            .answer("\"A\" camping victoria", videos("a", 1, 500))
            .exhaust("A Foo camping");

        let (summary, output) = run_captured(&profile, &search, &paths, 10, false)?;

        assert!(summary.quota_exhausted);
        assert_eq!(summary.processed, 1);
        assert_eq!(
            (summary.satisfied, summary.partial, summary.empty),
            (0, 0, 0)
        );
        assert_eq!(summary.total_videos, 0);
        assert_eq!(search.queries(), vec!["\"A\" camping victoria", "A Foo camping"]);
        assert!(!output.contains("Found 1 videos"));
        assert!(!paths.daily.exists());
        assert!(!paths.ledger.exists());
        Ok(())
    }

    #[test]
    fn sites_are_spaced_by_the_profile_delay() -> Result<()> {
        let delay = Duration::from_millis(100);
        let mut profile = RegionProfile::victoria();
        profile.site_delay = delay;
        let dir = tempdir()?;
        let paths = setup(
            dir.path(),
            &profile,
            json!([
                {"id": "1", "title": "A"},
                {"id": "2", "title": "B"}
            ]),
        )?;
        let search = ScriptedSearch::default();

        let started = Instant::now();
        let (single, _) = run_captured(&profile, &search, &paths, 1, true)?;
        let single_elapsed = started.elapsed();
        assert_eq!(single.processed, 1);
        assert!(single_elapsed < delay, "first site waited {single_elapsed:?}");

        let started = Instant::now();
        let (both, _) = run_captured(&profile, &search, &paths, 2, true)?;
        let both_elapsed = started.elapsed();
        assert_eq!(both.processed, 2);
        assert!(both_elapsed >= delay, "second site waited only {both_elapsed:?}");
        Ok(())
    }

    #[test]
    fn dry_runs_are_repeatable_and_write_nothing() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::victoria());
        let paths = setup(
            dir.path(),
            &profile,
            json!([
                {"id": "1", "title": "A", "location": "Foo"},
                {"id": "2", "title": "B"}
            ]),
        )?;
        let search = ScriptedSearch::default().answer("\"A\" camping victoria", videos("a", 2, 200));

        let (first, first_out) = run_captured(&profile, &search, &paths, 10, true)?;
        let (second, second_out) = run_captured(&profile, &search, &paths, 10, true)?;

        assert_eq!(first, second);
        assert_eq!(first_out, second_out);
        assert!(first_out.contains("[DRY RUN] No data will be written to file."));
        assert!(first_out.contains("[DRY RUN] No data was written."));
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn empty_and_partial_sites_go_to_the_ledger_only() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::victoria());
        let paths = setup(
            dir.path(),
            &profile,
            json!([
                {"id": "1", "title": "A", "location": "Foo"},
                {"id": "2", "title": "B", "location": "Bar"}
            ]),
        )?;
        let search = ScriptedSearch::default()
            .answer("\"B\" camping victoria", videos("b", 1, 150))
            .answer("B Bar camping", videos("bb", 2, 120));

        let (summary, output) = run_captured(&profile, &search, &paths, 10, false)?;

        assert_eq!(
            (summary.satisfied, summary.partial, summary.empty),
            (0, 1, 1)
        );
        assert_eq!(summary.total_videos, 3);
        assert!(output.contains("No suitable videos found."));
        assert!(output.contains("Found 3 videos: [NOT ENOUGH]"));
        let daily = stored(&paths)?;
        assert_eq!(daily.community_videos.len(), 1);
        assert_eq!(daily.community_videos[0].camping_site_id, "2");
        let views: Vec<u64> = daily.community_videos[0].videos.iter().map(|v| v.views).collect();
        assert_eq!(views, vec![150, 121, 120]);
        let ledger = load_ledger(&paths.ledger)?;
        assert_eq!(
            ledger
                .iter()
                .map(|e| (e.site_id.as_str(), e.count))
                .collect::<Vec<_>>(),
            vec![("1", 0), ("2", 3)]
        );
        Ok(())
    }

    #[test]
    fn korea_discovery_walks_every_fallback_until_minimum() -> Result<()> {
        let profile = quick(RegionProfile::korea());
        let site = Site {
            id: "k1".into(),
            title: "북한산".into(),
            location: Some("서울".into()),
            category: Some("Hiking".into()),
        };
        let mut own_channel = videos("own", 2, 9000);
        for video in &mut own_channel {
            video.channel_name = "OutboundScape Korea".into();
        }
        let search = ScriptedSearch::default()
            .answer("북한산 등산", own_channel)
            .answer("서울 북한산 등산", videos("loc", 1, 80))
            .answer(
                "북한산 서울 travel vlog",
                vec![
                    VideoResult::youtube("loc0", "dup", "Someone", 80),
                    VideoResult::youtube("en1", "vlog", "Traveler", 20),
                    VideoResult::youtube("en2", "vlog", "Traveler", 400),
                ],
            );

        let mut out = Vec::new();
        let outcome =
            discover_site_videos(&site, &profile, &Ranker::for_profile(&profile), &search, &mut out)?;

        assert_eq!(
            search.queries(),
            vec!["북한산 등산", "서울 북한산 등산", "북한산 서울 travel vlog"]
        );
        assert_eq!(search.calls.borrow()[2].locale.relevance_language, "en");
        match outcome {
            SearchOutcome::Videos(found) => {
                let ids: Vec<_> = found.iter().map(|v| v.video_id.as_str()).collect();
                assert_eq!(ids, vec!["en2", "loc0"]);
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn discovery_stops_once_primary_meets_minimum() -> Result<()> {
        let profile = quick(RegionProfile::korea());
        let site = Site {
            id: "k2".into(),
            title: "해운대".into(),
            location: Some("부산".into()),
            category: Some("Beach".into()),
        };
        let search = ScriptedSearch::default().answer("해운대 해변", videos("b", 8, 60));
        let mut out = Vec::new();
        let outcome =
            discover_site_videos(&site, &profile, &Ranker::for_profile(&profile), &search, &mut out)?;
        assert_eq!(search.queries().len(), 1);
        match outcome {
            SearchOutcome::Videos(found) => {
                assert_eq!(found.len(), 5);
                assert_eq!(found[0].video_id, "b7");
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn korea_run_records_location_name_and_category() -> Result<()> {
        let dir = tempdir()?;
        let profile = quick(RegionProfile::korea());
        let paths = setup(
            dir.path(),
            &profile,
            json!([{"id": "k1", "title": "지리산", "location": "구례", "category": "Mountain"}]),
        )?;
        let long_title = "가".repeat(60);
        let search = ScriptedSearch::default().answer(
            "지리산 등산",
            vec![
                VideoResult::youtube("v1", long_title, "산악회", 1_234_567),
                VideoResult::youtube("v2", "짧은 제목", "산악회", 55),
                VideoResult::youtube("v3", "세번째", "산악회", 70),
            ],
        );

        let (_, output) = run_captured(&profile, &search, &paths, 50, false)?;

        assert!(output.contains("  1 sites still need community videos.\n"));
        assert!(output.contains("[1/1] 지리산 (구례) [Mountain]"));
        assert!(output.contains(&format!("{}... (1,234,567 views) [v1]", "가".repeat(50))));
        let daily = stored(&paths)?;
        assert_eq!(
            daily.community_videos[0].location_name.as_deref(),
            Some("지리산, 구례")
        );
        Ok(())
    }

    #[test]
    fn missing_catalog_is_fatal() {
        let dir = tempdir().unwrap();
        let profile = quick(RegionProfile::victoria());
        let paths = DataPaths::resolve(dir.path(), &profile.files, day());
        let search = ScriptedSearch::default();
        assert!(run_captured(&profile, &search, &paths, 1, false).is_err());
    }

    #[test]
    fn location_name_drops_the_separator_without_location() {
        let mut site = Site {
            id: "k9".into(),
            title: "설악산".into(),
            location: Some("  ".into()),
            category: None,
        };
        assert_eq!(location_name(&site), "설악산");
        site.location = Some("속초".into());
        assert_eq!(location_name(&site), "설악산, 속초");
    }

    #[test]
    fn helpers_format_console_values() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(clip_title("abc", Some(5)), "abc");
        assert_eq!(clip_title("abcdef", Some(5)), "abcde...");
        assert_eq!(clip_title("abcdef", None), "abcdef");
        assert_eq!(SiteClass::of(0, 5), SiteClass::Empty);
        assert_eq!(SiteClass::of(4, 5), SiteClass::Partial);
        assert_eq!(SiteClass::of(5, 5), SiteClass::Satisfied);
    }
}
