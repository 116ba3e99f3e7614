use crate::error::IconUnavailable;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const ICON_PREFIX: &str = "features.websearch.custom.";
const ICON_EXTENSION: &str = "png";

#[derive(Debug, Clone)]
pub struct IconResolver {
    dir: PathBuf,
}

impl IconResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        IconResolver { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{ICON_PREFIX}{key}.{ICON_EXTENSION}"))
    }

    pub fn load(&self, key: &str) -> Result<String, IconUnavailable> {
        if key.is_empty() {
            return Err(IconUnavailable::NoKey);
        }
        let path = self.path_for(key);
        let bytes = fs::read(&path).map_err(|source| IconUnavailable::Read {
            path: path.clone(),
            source,
        })?;
        Ok(data_url(&path, &bytes))
    }

    /// Like [`IconResolver::load`], but a missing icon is an empty string.
    pub fn resolve(&self, key: &str) -> String {
        self.load(key).unwrap_or_else(|reason| {
            debug!(key, %reason, "no icon");
            String::new()
        })
    }
}

pub fn data_url(path: &Path, bytes: &[u8]) -> String {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    format!("data:image/{};base64,{}", ext, BASE64.encode(bytes))
}
