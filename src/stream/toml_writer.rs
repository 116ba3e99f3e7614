use crate::entry::SearchEntry;

pub const SEARCHERS_TABLE: &str = "webq.searchers";

pub trait TomlWriter {
    fn convert_toml(&self, icon: &str) -> String;
}
impl TomlWriter for SearchEntry {
    // values go out verbatim, a `"` inside one breaks the table
    fn convert_toml(&self, icon: &str) -> String {
        let mut toml = String::new();
        toml.push_str(&format!("[{}.\"{}\"]\n", SEARCHERS_TABLE, self.label));
        toml.push_str(&format!("label = \"{}\"\n", self.label));
        toml.push_str(&format!("shortname = \"{}\"\n", self.shortname));
        toml.push_str(&format!("template = \"{}\"\n", self.template));
        toml.push_str(&format!("icon = \"{}\"\n", icon));
        toml
    }
}
