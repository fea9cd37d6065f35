//! Track pool: random draws without replacement and a manual reset.
//!
//! The pool starts with every scanned track available. Each draw moves one
//! track from `available` to `used` until the pool runs dry, after which
//! only `reset` brings the tracks back.

use rand::Rng;

use crate::library::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// Every track was drawn since the last reset.
    #[error("all tracks have been drawn; reset the pool to start over")]
    PoolExhausted,
    /// The pool was built from an empty library.
    #[error("no tracks to draw from")]
    NoTracks,
}

/// Read-only snapshot used by the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus<'a> {
    pub available: usize,
    pub total: usize,
    pub used: &'a [Track],
}

#[derive(Debug, Clone)]
pub struct TrackPool {
    all_tracks: Vec<Track>,
    available: Vec<Track>,
    used: Vec<Track>,
    current: Option<Track>,
}

impl TrackPool {
    /// Create a pool with every track available and nothing drawn.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            available: tracks.clone(),
            all_tracks: tracks,
            used: Vec::new(),
            current: None,
        }
    }

    /// Draw a random track from the pool and move it to `used`.
    ///
    /// Fails with `DrawError::PoolExhausted` when nothing is left; state is
    /// untouched in that case.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Track, DrawError> {
        if self.available.is_empty() {
            return Err(DrawError::PoolExhausted);
        }

        let idx = rng.random_range(0..self.available.len());
        // `remove` keeps `available` in library order for display.
        let track = self.available.remove(idx);
        self.used.push(track.clone());
        Ok(&*self.current.insert(track))
    }

    /// Pick any track, ignoring the pool. `available` and `used` are left as is.
    pub fn draw_with_replacement<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&Track, DrawError> {
        if self.all_tracks.is_empty() {
            return Err(DrawError::NoTracks);
        }

        let idx = rng.random_range(0..self.all_tracks.len());
        let track = self.all_tracks[idx].clone();
        Ok(&*self.current.insert(track))
    }

    /// Put every track back into the pool.
    ///
    /// `current` is left as is, so the last drawn track stays on screen.
    pub fn reset(&mut self) {
        self.available = self.all_tracks.clone();
        self.used.clear();
    }

    pub fn status(&self) -> PoolStatus<'_> {
        PoolStatus {
            available: self.available.len(),
            total: self.all_tracks.len(),
            used: &self.used,
        }
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn all_tracks(&self) -> &[Track] {
        &self.all_tracks
    }

    pub fn available(&self) -> &[Track] {
        &self.available
    }

    pub fn used(&self) -> &[Track] {
        &self.used
    }

    /// True when the library had no tracks at all.
    pub fn is_empty(&self) -> bool {
        self.all_tracks.is_empty()
    }

    /// True when there are tracks but none left to draw.
    pub fn is_exhausted(&self) -> bool {
        !self.all_tracks.is_empty() && self.available.is_empty()
    }
}
