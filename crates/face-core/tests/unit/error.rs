use super::*;

#[test]
fn display_names_the_offending_id() {
    let err = FaceError::SurfaceNotFound("emoji".to_string());
    assert_eq!(err.to_string(), "surface 'emoji' not found");

    let err = FaceError::UnknownExpression("wink".to_string());
    assert!(err.to_string().contains("'wink'"));
}

#[test]
fn invalid_geometry_prefix_is_stable() {
    let err = FaceError::invalid_geometry("radius must be positive");
    assert!(err.to_string().starts_with("invalid face geometry:"));
}

#[test]
fn json_errors_convert() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: FaceError = parse.unwrap_err().into();
    assert!(matches!(err, FaceError::Config(_)));
}
