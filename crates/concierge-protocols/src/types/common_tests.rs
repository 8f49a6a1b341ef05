use super::*;

#[test]
fn test_risk_level_default() {
    let level = RiskLevel::default();
    assert_eq!(level, RiskLevel::Low);
}

#[test]
fn test_risk_level_ordering() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
}

#[test]
fn test_risk_level_serialization() {
    let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
    assert_eq!(json, "\"medium\"");

    let parsed: RiskLevel = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, RiskLevel::Medium);
}

#[test]
fn test_version_display() {
    assert_eq!(Version::new(0, 1, 0).to_string(), "0.1.0");
}

#[test]
fn test_version_display_prerelease() {
    let mut version = Version::new(1, 2, 3);
    version.prerelease = Some("beta.1".to_string());
    assert_eq!(version.to_string(), "1.2.3-beta.1");
}

#[test]
fn test_version_serialization_skips_missing_prerelease() {
    let json = serde_json::to_string(&Version::new(0, 1, 0)).unwrap();
    assert!(!json.contains("prerelease"));
}
