pub mod config;
pub mod entry;
pub mod error;
pub mod icon;
pub mod migrate;
pub mod stream;
pub mod template;

pub use config::Config;
pub use entry::SearchEntry;
pub use error::{Error, IconUnavailable};
pub use icon::IconResolver;
pub use migrate::{Migration, Summary};
pub use stream::plist_reader::PlistReader;
pub use stream::toml_writer::TomlWriter;
