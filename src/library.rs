//! Library module: scans a folder for track images.
//!
//! `library::model` defines the `Track` type, `library::scan` walks the
//! folder and `library::display` turns file names into track names.

mod display;
mod model;
mod scan;

pub use model::Track;
pub use scan::scan;
