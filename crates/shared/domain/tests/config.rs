use folio_domain::config::SiteConfig;
use std::path::PathBuf;

#[test]
fn defaults_are_sensible() {
    let config = SiteConfig::default();
    assert_eq!(config.window.title, "Folio");
    assert_eq!(config.prefs.data_dir, PathBuf::from(".folio"));
}

#[test]
fn partial_toml_fills_missing_sections_with_defaults() {
    let raw = r#"
        [window]
        title = "Portfolio"
    "#;
    let config: SiteConfig = toml::from_str(raw).expect("config should deserialize");
    assert_eq!(config.window.title, "Portfolio");
    assert!((config.window.width - 1200.0).abs() < f64::EPSILON);
    assert_eq!(config.prefs.data_dir, PathBuf::from(".folio"));
}
