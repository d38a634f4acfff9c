use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering as AtomicOrdering},
};

use futures::{FutureExt, future::BoxFuture};

use super::*;
use crate::assets::loader::{LoadedAsset, ReadyFont};

#[derive(Default)]
struct CountingLoader {
    calls: AtomicUsize,
}

impl AssetLoader for CountingLoader {
    fn load(&self, asset: &AssetDescriptor) -> BoxFuture<'static, FolioResult<LoadedAsset>> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        let res = if asset.locator() == "missing" {
            Err(FolioError::asset("missing"))
        } else {
            Ok(LoadedAsset::Font(ReadyFont {
                family: asset.locator().to_string(),
                faces: 1,
            }))
        };
        futures::future::ready(res).boxed()
    }
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "folio_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn manifest() -> Vec<AssetDescriptor> {
    vec![
        AssetDescriptor::Font("Fira Sans".to_string()),
        AssetDescriptor::Font("missing".to_string()),
    ]
}

#[test]
fn first_visit_preloads_and_marks_flag() {
    let flag = MemoryLoadFlag::new();
    let loader = CountingLoader::default();
    let last = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&last);

    let report = pollster::block_on(boot(&flag, &manifest(), &loader, move |p| {
        sink.store(p as usize, AtomicOrdering::SeqCst)
    }));

    match report {
        BootReport::Loaded { outcomes, failed } => {
            assert_eq!(outcomes.len(), 2);
            assert_eq!(failed, 1);
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
    assert!(flag.has_loaded_before());
    assert_eq!(last.load(AtomicOrdering::SeqCst), 100);
    assert_eq!(loader.calls.load(AtomicOrdering::SeqCst), 2);
}

#[test]
fn repeat_visit_skips_loading() {
    let flag = MemoryLoadFlag::already_loaded();
    let loader = CountingLoader::default();
    let report = pollster::block_on(boot(&flag, &manifest(), &loader, |_| {}));
    assert!(matches!(report, BootReport::Skipped));
    assert!(!report.did_preload());
    assert_eq!(loader.calls.load(AtomicOrdering::SeqCst), 0);
}

#[test]
fn rejected_manifest_degrades_without_marking() {
    let flag = MemoryLoadFlag::new();
    let loader = CountingLoader::default();
    let report = pollster::block_on(boot(&flag, &[], &loader, |_| {}));
    match report {
        BootReport::Degraded { reason } => assert!(reason.contains("manifest")),
        other => panic!("expected Degraded, got {other:?}"),
    }
    assert!(!flag.has_loaded_before());
}

#[test]
fn file_flag_round_trips_and_keeps_other_keys() {
    let path = temp_file("flag").join("state.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let flag = FileLoadFlag::new(&path, "@folio");
    assert!(!flag.has_loaded_before());
    flag.mark_loaded().unwrap();
    assert!(flag.has_loaded_before());

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["theme"], "dark");
    assert_eq!(saved["@folio"], true);

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn file_flag_tolerates_missing_and_corrupt_files() {
    let dir = temp_file("flag_corrupt");
    let path = dir.join("nested").join("state.json");
    let flag = FileLoadFlag::new(&path, "k");
    assert!(!flag.has_loaded_before());

    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();
    assert!(!flag.has_loaded_before());

    flag.mark_loaded().unwrap();
    assert!(flag.has_loaded_before());
    assert_eq!(flag.path(), path.as_path());

    std::fs::remove_dir_all(&dir).ok();
}
