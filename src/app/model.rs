//! Application model: the per-session `App`.
//!
//! `App` owns the track pool, the RNG used for draws and the UI toggles.
//! Key handlers receive it by `&mut` and the renderer reads it.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{DrawMode, Settings};
use crate::library::Track;
use crate::pool::{DrawError, TrackPool};
use crate::preview::ImagePreview;

/// Severity of a transient message shown in the status box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }
}

/// The main application model.
pub struct App {
    pub pool: TrackPool,
    pub mode: DrawMode,
    pub library_dir: PathBuf,
    /// Set when the track folder could not be scanned at all.
    pub library_error: Option<String>,
    pub notice: Option<Notice>,

    pub show_used: bool,
    pub show_all: bool,
    pub show_image: bool,
    pub preview: ImagePreview,

    rng: StdRng,
}

impl App {
    /// Create a new `App` over the scanned `tracks`.
    pub fn new(tracks: Vec<Track>, library_dir: PathBuf, settings: &Settings) -> Self {
        let rng = match settings.draw.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            pool: TrackPool::new(tracks),
            mode: settings.draw.mode,
            library_dir,
            library_error: None,
            notice: None,

            show_used: settings.ui.show_used,
            show_all: settings.ui.show_all,
            show_image: settings.ui.show_image,
            preview: ImagePreview::default(),

            rng,
        }
    }

    /// Record a scan failure; draw and reset stay disabled.
    pub fn set_library_error(&mut self, err: String) {
        self.library_error = Some(err);
    }

    /// Return true if the library contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.pool.is_empty()
    }

    pub fn current(&self) -> Option<&Track> {
        self.pool.current()
    }

    /// Draw a track according to the active `mode`.
    pub fn draw(&mut self) {
        if !self.has_tracks() {
            self.notice = Some(Notice::info("No tracks to draw from."));
            return;
        }

        let drawn = match self.mode {
            DrawMode::Pool => self.pool.draw(&mut self.rng),
            DrawMode::Replace => self.pool.draw_with_replacement(&mut self.rng),
        }
        .cloned();

        match drawn {
            Ok(track) => {
                tracing::debug!(
                    track = %track.name,
                    remaining = self.pool.available().len(),
                    "drew track"
                );
                self.notice = None;
                if self.show_image {
                    self.preview.load(&track.image_path);
                }
            }
            Err(DrawError::PoolExhausted) => {
                tracing::info!(total = self.pool.all_tracks().len(), "pool exhausted");
                self.notice = Some(Notice::warning(
                    "All tracks have been drawn. Press r to reset the pool.",
                ));
            }
            Err(err @ DrawError::NoTracks) => {
                self.notice = Some(Notice::info(err.to_string()));
            }
        }
    }

    /// Put every track back into the pool. The current track stays displayed.
    pub fn reset(&mut self) {
        if !self.has_tracks() {
            self.notice = Some(Notice::info("No tracks to reset."));
            return;
        }

        self.pool.reset();
        tracing::info!(total = self.pool.all_tracks().len(), "pool reset");
        self.notice = Some(Notice::info("Pool reset: every track is back in the draw."));
    }

    /// Switch between drawing from the pool and drawing from all tracks.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.notice = Some(Notice::info(format!("Mode: {}", self.mode.label())));
    }

    /// Turn the in-terminal image on or off for the current track.
    pub fn toggle_image(&mut self) {
        self.show_image = !self.show_image;
        match (self.show_image, self.pool.current()) {
            (true, Some(track)) => {
                let path = track.image_path.clone();
                self.preview.load(&path);
            }
            _ => self.preview.clear(),
        }
    }

    pub fn toggle_used(&mut self) {
        self.show_used = !self.show_used;
    }

    pub fn toggle_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Text for the status box, e.g. `Available: 3/8`.
    pub fn status_line(&self) -> String {
        let status = self.pool.status();
        match self.mode {
            DrawMode::Pool => format!("Available: {}/{}", status.available, status.total),
            DrawMode::Replace => format!("Tracks: {}", status.total),
        }
    }

    /// All tracks sorted by name, for the "all tracks" list.
    pub fn tracks_by_name(&self) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self.pool.all_tracks().iter().collect();
        tracks.sort_by_key(|t| t.name.to_lowercase());
        tracks
    }
}
