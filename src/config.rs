use std::path::{Path, PathBuf};

const ALFRED3_PREFERENCES: &str = "Library/Application Support/Alfred 3/Alfred.alfredpreferences";

/// Where the migration reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub resources: PathBuf,
}

impl Config {
    pub fn new(source: impl Into<PathBuf>, resources: impl Into<PathBuf>) -> Self {
        Config {
            source: source.into(),
            resources: resources.into(),
        }
    }

    /// Locations Alfred 3 uses under the given home directory.
    pub fn alfred3(home: &Path) -> Self {
        let preferences = home.join(ALFRED3_PREFERENCES);
        Config {
            source: preferences.join("preferences/features/websearch/prefs.plist"),
            resources: preferences.join("resources"),
        }
    }
}
