use crate::config::Config;
use crate::error::Error;
use crate::icon::IconResolver;
use crate::stream::plist_reader::PlistReader;
use crate::stream::toml_writer::TomlWriter;
use crate::template;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub entries: usize,
    pub icons: usize,
}

pub struct Migration {
    config: Config,
    icons: IconResolver,
}

impl Migration {
    pub fn new(config: Config) -> Self {
        let icons = IconResolver::new(&config.resources);
        Migration { config, icons }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<Summary, Error> {
        let entries = PlistReader::from_path(&self.config.source)?;
        let mut summary = Summary::default();
        let mut labels = HashSet::new();
        writeln!(out)?;
        for entry in &entries {
            if let Err(reason) = template::markers(&entry.template) {
                warn!(key = %entry.icon_key, template = %entry.template, %reason, "webq will reject this template");
            }
            if !labels.insert(entry.label.as_str()) {
                warn!(key = %entry.icon_key, label = %entry.label, "label already used, webq keeps one searcher per label");
            }
            let icon = self.icons.resolve(&entry.icon_key);
            if !icon.is_empty() {
                summary.icons += 1;
            }
            writeln!(out, "{}", entry.convert_toml(&icon))?;
            summary.entries += 1;
        }
        info!(
            source = %self.config.source.display(),
            entries = summary.entries,
            icons = summary.icons,
            "migrated web searches"
        );
        Ok(summary)
    }

    /// Renders in memory first, `path` is left alone when the migration fails.
    pub fn write_to(&self, path: &Path) -> Result<Summary, Error> {
        let mut out = Vec::new();
        let summary = self.run(&mut out)?;
        fs::write(path, out).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(summary)
    }
}
