//! Argument handling and startup shared by both finder binaries.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{RuntimeOverrides, resolve_runtime_settings};
use crate::layout::DataPaths;
use crate::pipeline::{RunOptions, run};
use crate::profile::RegionProfile;
use crate::youtube::YouTubeClient;

#[derive(Debug, Clone, Args)]
pub struct FinderArgs {
    /// YouTube Data API key
    #[arg(long)]
    pub api_key: String,

    /// Max sites to process per run (defaults to the region's limit)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Preview without writing to file
    #[arg(long)]
    pub dry_run: bool,

    /// Directory holding the catalog and result files (overrides DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl FinderArgs {
    pub fn run_options(&self, profile: &RegionProfile) -> RunOptions {
        RunOptions {
            limit: self.limit.unwrap_or(profile.default_limit),
            dry_run: self.dry_run,
        }
    }
}

/// Diagnostics go to stderr so stdout stays the run report. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Resolves settings, builds the API client and runs the pipeline against
/// today's files.
pub fn run_finder(profile: RegionProfile, args: FinderArgs) -> Result<()> {
    let settings = resolve_runtime_settings(RuntimeOverrides {
        data_dir: args.data_dir.clone(),
        ..RuntimeOverrides::default()
    })?;
    let today = Local::now().date_naive();
    let paths = DataPaths::resolve(&settings.data_dir, &profile.files, today);
    debug!(
        profile = %profile.name,
        data_dir = %settings.data_dir.display(),
        api = %settings.api_base_url,
        "starting run"
    );

    let client = YouTubeClient::new(&settings.api_base_url, &args.api_key);
    let options = args.run_options(&profile);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&profile, &client, &paths, options, &mut out)?;
    Ok(())
}
