//! Reference data: the site catalog and the set of sites that already have
//! community videos.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use walkdir::WalkDir;

use crate::layout::DataPaths;
use crate::model::{CoverageFile, Site};

/// Reads `{ "<key>": [site, ...] }`. A missing file, malformed JSON or a
/// missing key are all fatal.
pub fn load_sites(path: &Path, key: &str) -> Result<Vec<Site>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut document: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let sites = document
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| anyhow!("{} has no `{key}` array", path.display()))?;
    serde_json::from_value(sites)
        .with_context(|| format!("decoding `{key}` entries in {}", path.display()))
}

/// Unions every `campingSiteId` from the aggregate file and all dated files
/// in the data directory.
pub fn load_covered_ids(paths: &DataPaths) -> Result<BTreeSet<String>> {
    let mut covered = BTreeSet::new();

    if paths.aggregate.exists() {
        collect_site_ids(&paths.aggregate, &mut covered)?;
    }

    for entry in WalkDir::new(&paths.data_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("scanning {}", paths.data_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !paths.is_daily_file_name(&name) {
            continue;
        }
        collect_site_ids(entry.path(), &mut covered)?;
    }

    Ok(covered)
}

fn collect_site_ids(path: &Path, covered: &mut BTreeSet<String>) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let parsed: CoverageFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    covered.extend(
        parsed
            .community_videos
            .into_iter()
            .map(|entry| entry.camping_site_id),
    );
    Ok(())
}

/// Catalog order is kept; covered sites are dropped.
pub fn pending_sites(sites: &[Site], covered: &BTreeSet<String>) -> Vec<Site> {
    sites
        .iter()
        .filter(|site| !covered.contains(&site.id))
        .cloned()
        .collect()
}
