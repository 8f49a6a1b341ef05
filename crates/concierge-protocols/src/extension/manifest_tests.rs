use super::*;

#[test]
fn test_extension_manifest_new() {
    let manifest = ExtensionManifest::new("tools-schedule", "Schedule Tools", Version::new(0, 1, 0));
    assert_eq!(manifest.id, "tools-schedule");
    assert_eq!(manifest.name, "Schedule Tools");
    assert_eq!(manifest.version.minor, 1);
    assert!(manifest.description.is_empty());
    assert!(manifest.provides.tools.is_empty());
}

#[test]
fn test_extension_manifest_builders() {
    let manifest = ExtensionManifest::new("tools-weather", "Weather Tools", Version::new(0, 1, 0))
        .with_description("Weather lookups")
        .with_tools(["get_weather_information"]);
    assert_eq!(manifest.description, "Weather lookups");
    assert_eq!(manifest.provides.tools, vec!["get_weather_information".to_string()]);
}

#[test]
fn test_extension_manifest_serialization() {
    let manifest = ExtensionManifest::new("tools-reddit", "Reddit Tools", Version::new(0, 1, 0))
        .with_tools(["get_reddit_recommendations"]);
    let json = serde_json::to_string(&manifest).unwrap();
    assert!(json.contains("tools-reddit"));
    assert!(json.contains("get_reddit_recommendations"));
}

#[test]
fn test_extension_manifest_deserialization_defaults() {
    let json = r#"{"id":"x","name":"X","version":{"major":1,"minor":0,"patch":0},"description":""}"#;
    let manifest: ExtensionManifest = serde_json::from_str(json).unwrap();
    assert!(manifest.provides.tools.is_empty());
    assert!(manifest.metadata.is_empty());
}
