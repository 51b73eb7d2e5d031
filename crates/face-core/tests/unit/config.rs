use super::*;
use crate::error::FaceError;

#[test]
fn defaults_match_reference_face() {
    let config = FaceConfig::default();
    assert_eq!(config.version, FaceConfig::CURRENT_VERSION);
    assert_eq!(config.geometry.radius, 100.0);
    assert_eq!(config.geometry.anchor_shift_y, -15.0);
    assert_eq!(config.tuning.vertical_bulge, 0.06);
    assert_eq!(config.tuning.horizontal_bulge, 0.15);
    assert_eq!(config.style.outline_width, 2.0);
    assert_eq!(config.glyphs.len(), 5);
    assert_eq!(config.missing_glyph, MissingGlyphPolicy::FallbackToDefault);
}

#[test]
fn partial_json_keeps_defaults() {
    let config = FaceConfig::from_json(
        r#"{
            "geometry": { "radius": 60 },
            "tuning": { "horizontal_bulge": 0.3 },
            "missing_glyph": "strict"
        }"#,
    )
    .unwrap();

    assert_eq!(config.geometry.radius, 60.0);
    assert_eq!(config.geometry.anchor_shift_y, -15.0);
    assert_eq!(config.tuning.horizontal_bulge, 0.3);
    assert_eq!(config.tuning.vertical_bulge, 0.06);
    assert_eq!(config.missing_glyph, MissingGlyphPolicy::Strict);
    assert!(config.glyphs.contains_key("default"));
}

#[test]
fn custom_glyphs_replace_table() {
    let config = FaceConfig::from_json(r#"{ "glyphs": { "default": "o_o" } }"#).unwrap();
    assert_eq!(config.glyphs.len(), 1);
    assert_eq!(config.glyphs["default"], "o_o");
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = FaceConfig::from_json("{ \"geometry\": 3 }").unwrap_err();
    assert!(matches!(err, FaceError::Config(_)));
}

#[test]
fn save_then_load_file() {
    let mut config = FaceConfig::default();
    config.style.outline_width = 3.5;
    config.login.username = "ada".to_string();

    let path = std::env::temp_dir().join(format!("face-config-{}.json", std::process::id()));
    config.save(&path).unwrap();
    let loaded = FaceConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_io_error() {
    let err = FaceConfig::load("/definitely/not/here/face.json").unwrap_err();
    assert!(matches!(err, FaceError::Io(_)));
}
