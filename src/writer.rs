//! Persists a run: the dated result file and the "needs more videos" ledger.
//!
//! Both files are rewritten in full through a sibling `.tmp` file. Nothing
//! here touches disk when the run is a dry run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::layout::DataPaths;
use crate::model::{DailyResultFile, NotEnoughEntry, SiteVideoEntry};

/// Today's file as written by an earlier run, or a fresh one.
pub fn load_daily_file(path: &Path, date: &str) -> Result<DailyResultFile> {
    if !path.exists() {
        return Ok(DailyResultFile::empty(date));
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_ledger(path: &Path) -> Result<Vec<NotEnoughEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Appends entries whose site id is not yet in the ledger. Returns how many
/// were added.
pub fn merge_ledger(ledger: &mut Vec<NotEnoughEntry>, additions: &[NotEnoughEntry]) -> usize {
    let mut known: HashSet<String> = ledger.iter().map(|entry| entry.site_id.clone()).collect();
    let before = ledger.len();
    for entry in additions {
        if known.insert(entry.site_id.clone()) {
            ledger.push(entry.clone());
        }
    }
    ledger.len() - before
}

/// Pretty-printed JSON, written to `<name>.tmp` and renamed into place.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut payload = serde_json::to_vec_pretty(value)
        .with_context(|| format!("serializing {}", path.display()))?;
    payload.push(b'\n');
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, payload).with_context(|| format!("writing {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("finalizing {}", path.display()))?;
    Ok(())
}

/// What [`persist_run`] actually wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub daily_file: Option<PathBuf>,
    pub ledger_file: Option<PathBuf>,
    pub ledger_added: usize,
}

/// Appends `new_entries` to `daily` and merges `not_enough` into the ledger.
/// The daily file is only written when there is something new; the ledger
/// merge is computed even in a dry run so its outcome can be reported.
pub fn persist_run(
    paths: &DataPaths,
    daily: &mut DailyResultFile,
    new_entries: Vec<SiteVideoEntry>,
    not_enough: &[NotEnoughEntry],
    dry_run: bool,
) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    if !new_entries.is_empty() && !dry_run {
        daily.append(new_entries);
        write_json_atomic(&paths.daily, daily)?;
        info!(
            path = %paths.daily.display(),
            total = daily.community_videos.len(),
            "wrote daily results"
        );
        report.daily_file = Some(paths.daily.clone());
    }

    if !not_enough.is_empty() {
        let mut ledger = load_ledger(&paths.ledger)?;
        report.ledger_added = merge_ledger(&mut ledger, not_enough);
        if !dry_run {
            write_json_atomic(&paths.ledger, &ledger)?;
            info!(
                path = %paths.ledger.display(),
                added = report.ledger_added,
                "wrote ledger"
            );
            report.ledger_file = Some(paths.ledger.clone());
        }
    }

    Ok(report)
}
