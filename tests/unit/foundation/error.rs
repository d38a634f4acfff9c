use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FolioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FolioError::manifest("x")
            .to_string()
            .contains("manifest error:")
    );
    assert!(FolioError::asset("x").to_string().contains("asset error:"));
    assert!(
        FolioError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(FolioError::config("x").to_string().contains("config error:"));
    assert!(
        FolioError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FolioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn alternate_format_keeps_context_chain() {
    let err: FolioError = anyhow::Error::new(std::io::Error::other("disk gone"))
        .context("read asset bytes")
        .into();
    let full = format!("{err:#}");
    assert!(full.contains("read asset bytes"));
    assert!(full.contains("disk gone"));
}

#[test]
fn json_errors_map_to_serde() {
    let parse = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = FolioError::from(parse);
    assert!(matches!(err, FolioError::Serde(_)));
}
