use lead_finder::{LeadConfig, LeadError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_resolve_without_file_uses_defaults() {
    let config = LeadConfig::resolve(None).unwrap();
    assert_eq!(config.geography.center_zip, "75686");
    assert_eq!(config.storage.export_prefix, "handyman_leads");
}

#[test]
fn test_resolve_reads_file_overrides() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[geography]
center_zip = "75701"
center_coords = [32.35, -95.30]
radius_miles = 75

[search]
craigslist_keywords = ["roof repair", "gutter repair"]

[storage]
export_dir = "./tyler-exports"
export_prefix = "tyler_leads"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = LeadConfig::resolve(Some(temp_file.path())).unwrap();

    assert_eq!(config.geography.center_zip, "75701");
    assert_eq!(config.geography.center_coords, (32.35, -95.30));
    assert_eq!(config.geography.radius_miles, 75);
    assert_eq!(config.keyword_preview(5), "roof repair, gutter repair...");
    assert!(config.export_filename().starts_with("tyler_leads_"));
    assert!(config.export_filename().ends_with(".csv"));
    assert_eq!(config.regions.categories, vec!["sss", "ggg", "roo"]);
}

#[test]
fn test_resolve_missing_file_is_fatal() {
    let err = LeadConfig::resolve(Some(std::path::Path::new(
        "/nonexistent/lead-finder/config.toml",
    )))
    .unwrap_err();

    assert!(matches!(err, LeadError::ConfigNotFoundError { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err
        .user_friendly_message()
        .contains("/nonexistent/lead-finder/config.toml"));
}

#[test]
fn test_resolve_rejects_invalid_values() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[geography]\nradius_miles = 0\n")
        .unwrap();

    let err = LeadConfig::resolve(Some(temp_file.path())).unwrap_err();
    assert!(matches!(err, LeadError::InvalidConfigValueError { .. }));
}
