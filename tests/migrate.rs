use alfred_webq::{Config, Error, Migration, Summary};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PREFS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>customSites</key>
	<dict>
		<key>abc123</key>
		<dict>
			<key>enabled</key>
			<true/>
			<key>keyword</key>
			<string>ex</string>
			<key>text</key>
			<string>Example</string>
			<key>url</key>
			<string>https://example.com/?q={query}</string>
			<key>utf8</key>
			<true/>
		</dict>
		<key>def456</key>
		<dict>
			<key>keyword</key>
			<string>nt</string>
			<key>url</key>
			<string>https://notext.example.com/{query}/{query}</string>
		</dict>
	</dict>
</dict>
</plist>
"#;

fn setup(prefs: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("prefs.plist");
    let resources = dir.path().join("resources");
    fs::write(&source, prefs).unwrap();
    fs::create_dir(&resources).unwrap();
    (dir, Config::new(source, resources))
}

fn run(config: Config) -> (Summary, String) {
    let mut out = Vec::new();
    let summary = Migration::new(config).run(&mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

fn add_icon(resources: &Path, key: &str, bytes: &[u8]) {
    fs::write(
        resources.join(format!("features.websearch.custom.{key}.png")),
        bytes,
    )
    .unwrap();
}

#[test]
fn migrates_every_entry_in_order() {
    let (_dir, config) = setup(PREFS);
    let (summary, out) = run(config);
    assert_eq!(summary, Summary { entries: 2, icons: 0 });
    assert_eq!(
        out,
        r#"
[webq.searchers."Example"]
label = "Example"
shortname = "ex"
template = "https://example.com/?q={0}"
icon = ""

[webq.searchers.""]
label = ""
shortname = "nt"
template = "https://notext.example.com/{0}/{query}"
icon = ""

"#
    );
}

#[test]
fn embeds_icons_as_data_urls() {
    let (_dir, config) = setup(PREFS);
    add_icon(&config.resources, "abc123", b"\x89PNG");
    let (summary, out) = run(config);
    assert_eq!(summary, Summary { entries: 2, icons: 1 });
    assert!(out.contains("icon = \"data:image/png;base64,iVBORw==\"\n"));
    assert_eq!(out.matches("icon = \"\"").count(), 1);
}

#[test]
fn single_entry_without_icon() {
    let prefs = PREFS.replace(
        "\t\t<key>def456</key>\n\t\t<dict>\n\t\t\t<key>keyword</key>\n\t\t\t<string>nt</string>\n\t\t\t<key>url</key>\n\t\t\t<string>https://notext.example.com/{query}/{query}</string>\n\t\t</dict>\n",
        "",
    );
    let (_dir, config) = setup(&prefs);
    let (summary, out) = run(config);
    assert_eq!(summary.entries, 1);
    assert_eq!(
        out,
        "\n[webq.searchers.\"Example\"]\nlabel = \"Example\"\nshortname = \"ex\"\ntemplate = \"https://example.com/?q={0}\"\nicon = \"\"\n\n"
    );
}

#[test]
fn no_entries() {
    let prefs = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>customSites</key>
	<dict/>
</dict>
</plist>
"#;
    let (_dir, config) = setup(prefs);
    let (summary, out) = run(config);
    assert_eq!(summary, Summary::default());
    assert_eq!(out, "\n");
}

#[test]
fn unterminated_entry_aborts() {
    let cut = PREFS.find("\t\t</dict>").unwrap();
    let (_dir, config) = setup(&PREFS[..cut]);
    let mut out = Vec::new();
    let err = Migration::new(config).run(&mut out).unwrap_err();
    assert!(err.is_malformed_input());
    assert_eq!(
        err.to_string(),
        "entry `abc123` opened at line 7 is never closed"
    );
}

#[test]
fn missing_source_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().join("absent.plist"), dir.path());
    let mut out = Vec::new();
    let err = Migration::new(config).run(&mut out).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(!err.is_malformed_input());
    assert!(out.is_empty());
}

#[test]
fn failed_run_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("webq.toml");
    fs::write(&output, "previous = \"keep me\"\n").unwrap();

    let missing = Config::new(dir.path().join("absent.plist"), dir.path());
    let err = Migration::new(missing).write_to(&output).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous = \"keep me\"\n");

    let cut = PREFS.find("\t\t</dict>").unwrap();
    let (_prefs_dir, unterminated) = setup(&PREFS[..cut]);
    let err = Migration::new(unterminated).write_to(&output).unwrap_err();
    assert!(err.is_malformed_input());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous = \"keep me\"\n");
}

#[test]
fn write_to_replaces_output_on_success() {
    let (dir, config) = setup(PREFS);
    let output = dir.path().join("webq.toml");
    fs::write(&output, "previous = \"keep me\"\n").unwrap();
    let summary = Migration::new(config.clone()).write_to(&output).unwrap();
    assert_eq!(summary.entries, 2);
    let (_, expected) = run(config);
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}
