//! Configuration files layered over the embedded defaults

use std::io::Write;
use textnorm::config::Loader;
use textnorm::{CallsignChoices, Error};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn user_file_overrides_only_its_keys() {
    let file = write_config("[callsign]\nmax_prefix_len = 4\n");
    let config = Loader::new().with_file(file.path()).build().expect("config to build");

    assert_eq!(config.callsign.max_prefix_len, 4);
    // Untouched keys keep their defaults
    assert_eq!(config.callsign.disallowed, vec!["GH"]);
    assert_eq!(config.truncate.ellipsis, "...");
}

#[test]
fn configured_options_drive_callsigns() {
    let file = write_config("[callsign]\ndisallowed = [\"gr\", \"GRM\"]\nmax_prefix_len = 4\n");
    let config = Loader::new().with_file(file.path()).build().unwrap();
    let options = config.callsign.options().unwrap();

    let candidates: Vec<String> = CallsignChoices::with_options("Grml", &options)
        .take(4)
        .collect();
    assert_eq!(candidates, vec!["GRML", "GR2", "GRM2", "GRML2"]);
}

#[test]
fn configured_aliases_extend_the_codec_table() {
    let file = write_config(
        "[codec]\ndefault = \"latin1\"\n\n[codec.aliases]\nx-legacy = \"cp1252\"\n",
    );
    let config = Loader::new().with_file(file.path()).build().unwrap();
    let registry = config.codec.registry().unwrap();

    assert_eq!(registry.get("X_LEGACY").map(|c| c.name()), Some("cp1252"));
    let fallback = registry.resolve("nonsense", config.codec.default_codec());
    assert_eq!(fallback.map(|c| c.name()), Some("iso8859-1"));
}

#[test]
fn aliases_to_transforms_are_rejected() {
    let file = write_config("[codec.aliases]\npacked = \"zlib\"\n");
    let config = Loader::new().with_file(file.path()).build().unwrap();
    assert!(matches!(
        config.codec.registry(),
        Err(Error::UnknownCodec { alias, .. }) if alias == "packed"
    ));
}

#[test]
fn malformed_file_is_a_config_error() {
    let file = write_config("[callsign\nnot toml");
    let result = Loader::new().with_file(file.path()).build();
    assert!(matches!(result, Err(Error::Config(_))));
}
