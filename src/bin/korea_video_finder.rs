#![forbid(unsafe_code)]

//! Finds YouTube videos for Korean adventure sites (hiking, camping, fishing,
//! valleys, national parks) that have none yet.
//!
//! ```text
//! korea_video_finder --api-key KEY --limit 10 --dry-run
//! korea_video_finder --api-key KEY --limit 50
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser};
use community_video_finder::cli::{FinderArgs, init_tracing, run_finder};
use community_video_finder::profile::RegionProfile;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "korea_video_finder",
    about = "Find YouTube videos for Korea adventure sites"
)]
struct KoreaArgs {
    #[command(flatten)]
    finder: FinderArgs,

    /// Skip sites that already have a video (always on; covered sites are
    /// never searched)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = true)]
    skip_with_video: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = KoreaArgs::parse();
    debug!(skip_with_video = args.skip_with_video, "parsed arguments");
    run_finder(RegionProfile::korea(), args.finder)
}
