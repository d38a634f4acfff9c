use super::*;

#[test]
fn parses_kinds_in_order() {
    let m = Manifest::from_json_str(
        r#"[
            {"kind": "image", "locator": "/images/icon.webp"},
            {"kind": "font", "locator": "Fira Sans"},
            {"kind": "model", "locator": "/3d/grad.glb"}
        ]"#,
    )
    .unwrap();
    assert_eq!(
        m.entries(),
        &[
            AssetDescriptor::Image("/images/icon.webp".to_string()),
            AssetDescriptor::Font("Fira Sans".to_string()),
            AssetDescriptor::Model("/3d/grad.glb".to_string()),
        ]
    );
    assert_eq!(m.len(), 3);
}

#[test]
fn serializes_back_to_kind_locator_objects() {
    let m = Manifest::new(vec![AssetDescriptor::Font("Sans".to_string())]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"[{"kind":"font","locator":"Sans"}]"#);
}

#[test]
fn unknown_kind_is_a_manifest_error() {
    let err = Manifest::from_json_str(r#"[{"kind": "video", "locator": "a.mp4"}]"#).unwrap_err();
    assert!(matches!(err, FolioError::Manifest(_)));
}

#[test]
fn empty_locator_and_empty_manifest_are_rejected() {
    assert!(matches!(
        Manifest::from_json_str(r#"[{"kind": "image", "locator": "  "}]"#),
        Err(FolioError::Manifest(_))
    ));
    assert!(matches!(
        Manifest::from_json_str("[]"),
        Err(FolioError::Manifest(_))
    ));
}

#[test]
fn descriptor_accessors() {
    let d = AssetDescriptor::Model("x.glb".to_string());
    assert_eq!(d.kind(), "model");
    assert_eq!(d.locator(), "x.glb");
}
