use std::path::PathBuf;

/// A named image entry found by the library scan.
///
/// Two tracks are the same track when both the name and the path match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Track {
    pub name: String,
    pub image_path: PathBuf,
}

impl Track {
    pub fn new(name: impl Into<String>, image_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            image_path: image_path.into(),
        }
    }
}
