#![forbid(unsafe_code)]

//! Finds YouTube videos for Victoria camping sites that have none yet.
//!
//! ```text
//! victoria_video_finder --api-key KEY --limit 10 --dry-run
//! victoria_video_finder --api-key KEY --limit 100
//! ```

use anyhow::Result;
use clap::Parser;
use community_video_finder::cli::{FinderArgs, init_tracing, run_finder};
use community_video_finder::profile::RegionProfile;

#[derive(Debug, Parser)]
#[command(
    name = "victoria_video_finder",
    about = "Find YouTube videos for Victoria camping sites"
)]
struct VictoriaArgs {
    #[command(flatten)]
    finder: FinderArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let args = VictoriaArgs::parse();
    run_finder(RegionProfile::victoria(), args.finder)
}
