//! Application module: exposes the session model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the track pool, the draw
//! mode and the UI toggles for one session.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
