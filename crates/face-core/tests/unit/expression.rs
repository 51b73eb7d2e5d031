use super::*;

const FACE: [f32; 3] = [1.0, 0.843, 0.0];

fn machine(policy: MissingGlyphPolicy) -> ExpressionMachine {
    ExpressionMachine::new(GlyphTable::default(), FACE, policy)
}

#[test]
fn table_requires_default() {
    let err = GlyphTable::new([("happy", ":)")]).unwrap_err();
    assert!(matches!(err, FaceError::MissingDefaultGlyph));

    let table = GlyphTable::new([("default", "-_-"), ("happy", ":)")]).unwrap();
    assert_eq!(table.default_glyph(), "-_-");
    assert_eq!(table.get("happy"), Some(":)"));
    assert_eq!(table.get("sad"), None);
    assert_eq!(table.ids().collect::<Vec<_>>(), ["default", "happy"]);
}

#[test]
fn default_table_uses_one_nervous_key() {
    let table = GlyphTable::default();
    assert!(table.get("nervous").is_some());
    assert!(table.get("nervious").is_none());
    assert_eq!(table.default_glyph(), "･◡･");
}

#[test]
fn starts_at_default_and_not_transient() {
    let m = machine(MissingGlyphPolicy::default());
    assert_eq!(m.current().expression, DEFAULT_EXPRESSION);
    assert_eq!(m.current().color, FACE);
    assert!(!m.is_transient());
}

#[test]
fn set_overwrites_unconditionally() {
    let mut m = machine(MissingGlyphPolicy::default());
    m.set("sad", true);
    assert_eq!(m.current().expression, "sad");
    assert!(m.is_transient());

    m.set("happy", false);
    assert_eq!(m.current().expression, "happy");
    assert!(!m.is_transient());

    // no eager validation
    m.set("wink", false);
    assert_eq!(m.current().expression, "wink");
}

#[test]
fn clear_transient_fires_once() {
    let mut m = machine(MissingGlyphPolicy::default());
    m.set("sad", true);
    assert!(m.clear_transient());
    assert_eq!(m.current().expression, DEFAULT_EXPRESSION);
    assert!(!m.is_transient());
    assert!(!m.clear_transient());
}

#[test]
fn clear_transient_leaves_persistent_state() {
    let mut m = machine(MissingGlyphPolicy::default());
    m.set("shock", false);
    assert!(!m.clear_transient());
    assert_eq!(m.current().expression, "shock");
}

#[test]
fn fallback_policy_substitutes_default() {
    let mut m = machine(MissingGlyphPolicy::FallbackToDefault);
    m.set("wink", false);
    assert_eq!(m.glyph().unwrap(), "･◡･");
    // second lookup takes the same path without re-warning
    assert_eq!(m.glyph().unwrap(), "･◡･");
    assert!(m.warned.borrow().contains("wink"));
}

#[test]
fn strict_policy_fails_lookup() {
    let mut m = machine(MissingGlyphPolicy::Strict);
    assert_eq!(m.glyph().unwrap(), "･◡･");
    m.set("wink", false);
    assert!(matches!(m.glyph(), Err(FaceError::UnknownExpression(id)) if id == "wink"));
}

#[test]
fn policy_serializes_snake_case() {
    let json = serde_json::to_string(&MissingGlyphPolicy::FallbackToDefault).unwrap();
    assert_eq!(json, "\"fallback_to_default\"");
    let strict: MissingGlyphPolicy = serde_json::from_str("\"strict\"").unwrap();
    assert_eq!(strict, MissingGlyphPolicy::Strict);
}
