use std::path::Path;

/// Build the track name for an image file.
///
/// Takes the file stem and turns every `_` and `-` into a space, so
/// `Rainbow_Road.png` becomes `Rainbow Road`. Repeated separators are kept
/// as repeated spaces.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect()
}
