//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DrawMode, Settings};

/// Draw random track images from a folder, without repeats until you reset.
#[derive(Debug, Parser)]
#[command(name = "trackdraw", version, about)]
pub struct Cli {
    /// Folder with the track images (defaults to `library.dir`, usually `img`).
    pub dir: Option<PathBuf>,

    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How each draw picks its track.
    #[arg(long, value_enum)]
    pub mode: Option<DrawMode>,

    /// Seed the RNG for a reproducible draw order.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply flags on top of loaded settings; flags win.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.dir {
            settings.library.dir = dir.clone();
        }
        if let Some(mode) = self.mode {
            settings.draw.mode = mode;
        }
        if let Some(seed) = self.seed {
            settings.draw.seed = Some(seed);
        }
    }
}
