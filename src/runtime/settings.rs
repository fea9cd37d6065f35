use std::path::Path;

use crate::config;

/// Load settings, falling back to defaults when the config is broken.
///
/// A `--config` path must exist; the default location is optional.
///
/// Runs before logging is set up, so problems go to stderr.
pub fn load_settings(config_path: Option<&Path>) -> config::Settings {
    let loaded = match config_path {
        Some(path) => config::Settings::load_required(path),
        None => config::Settings::load(),
    };

    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("trackdraw: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("trackdraw: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
