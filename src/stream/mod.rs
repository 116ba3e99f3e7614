pub mod plist_reader;
pub mod toml_writer;
