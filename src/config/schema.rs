use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackdraw/config.toml` or `~/.config/trackdraw/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `TRACKDRAW__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub draw: DrawSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder scanned for track images.
    pub dir: PathBuf,
    /// File extensions to treat as images (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("img"),
            extensions: ["jpg", "jpeg", "png", "gif", "bmp", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: false,
            recursive: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DrawSettings {
    /// How a draw picks its track.
    pub mode: DrawMode,
    /// Fixed RNG seed for reproducible draw orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    /// Drawn tracks leave the pool until it is reset.
    #[default]
    #[serde(alias = "no-repeat", alias = "without-replacement")]
    Pool,
    /// Every draw picks from all tracks.
    #[serde(alias = "any", alias = "with-replacement")]
    Replace,
}

impl DrawMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Pool => Self::Replace,
            Self::Replace => Self::Pool,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pool => "No repeats",
            Self::Replace => "Repeats allowed",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the "used tracks" list starts expanded.
    pub show_used: bool,
    /// Whether the "all tracks" list starts expanded.
    pub show_all: bool,
    /// Render the drawn image in the terminal. When off, only the name and path are shown.
    pub show_image: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Track Randomizer ~ ".to_string(),
            show_used: false,
            show_all: false,
            show_image: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`. `RUST_LOG` wins over it.
    pub level: String,
    /// Log file. Nothing is logged when unset, since the terminal belongs to the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
