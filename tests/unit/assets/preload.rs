use std::sync::{Arc, Mutex};

use futures::future;

use super::*;
use crate::assets::loader::ReadyFont;
use crate::foundation::error::FolioError;

/// Resolves immediately; locators starting with `bad` fail, `hang` never settles.
struct ScriptLoader;

impl AssetLoader for ScriptLoader {
    fn load(&self, asset: &AssetDescriptor) -> BoxFuture<'static, FolioResult<LoadedAsset>> {
        let locator = asset.locator().to_string();
        if locator.starts_with("hang") {
            return future::pending().boxed();
        }
        let res = if locator.starts_with("bad") {
            Err(FolioError::asset(format!("cannot load {locator}")))
        } else {
            Ok(LoadedAsset::Font(ReadyFont {
                family: locator,
                faces: 1,
            }))
        };
        future::ready(res).boxed()
    }
}

fn recorder() -> (Arc<Mutex<Vec<u8>>>, impl FnMut(u8) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |p| sink.lock().unwrap().push(p))
}

fn font(name: &str) -> AssetDescriptor {
    AssetDescriptor::Font(name.to_string())
}

#[test]
fn progress_percent_rounds_half_up() {
    assert_eq!(progress_percent(0, 3), 0);
    assert_eq!(progress_percent(1, 3), 33);
    assert_eq!(progress_percent(2, 3), 67);
    assert_eq!(progress_percent(3, 3), 100);
    assert_eq!(progress_percent(1, 8), 13);
    assert_eq!(progress_percent(1, 200), 1);
    assert_eq!(progress_percent(5, 3), 100);
    assert_eq!(progress_percent(0, 0), 100);
}

#[test]
fn progress_percent_is_monotonic_in_settled() {
    for total in 1..=60 {
        let mut prev = 0;
        for settled in 0..=total {
            let p = progress_percent(settled, total);
            assert!(p >= prev);
            prev = p;
        }
        assert_eq!(prev, 100);
    }
}

#[test]
fn failures_are_recorded_in_place_and_still_count() {
    let (seen, on_progress) = recorder();
    let manifest = [font("a"), font("bad-b"), font("c"), font("d")];
    let outcomes = pollster::block_on(preload(&manifest, &ScriptLoader, on_progress)).unwrap();

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_success());
    assert!(outcomes[1].is_failure());
    assert!(outcomes[2].is_success());
    assert!(outcomes[3].is_success());
    match &outcomes[1] {
        LoadOutcome::Failure(reason) => assert!(reason.contains("bad-b")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(*seen.lock().unwrap(), vec![25, 50, 75, 100]);
}

#[test]
fn empty_or_blank_manifest_issues_nothing() {
    let (seen, on_progress) = recorder();
    let err = pollster::block_on(preload(&[], &ScriptLoader, on_progress)).unwrap_err();
    assert!(matches!(err, FolioError::Manifest(_)));

    let (_, on_progress) = recorder();
    assert!(preload_cancellable(&[font(" ")], &ScriptLoader, on_progress).is_err());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn cancel_resolves_pending_loads_and_finishes_progress() {
    let (seen, on_progress) = recorder();
    let manifest = [font("a"), font("hang-1"), font("hang-2")];
    let (done, cancel) = preload_cancellable(&manifest, &ScriptLoader, on_progress).unwrap();
    assert!(!cancel.is_cancelled());
    cancel.cancel();
    cancel.cancel();
    assert!(cancel.is_cancelled());

    let outcomes = pollster::block_on(done);
    assert!(outcomes[0].is_cancelled());
    assert!(outcomes[1].is_cancelled());
    assert!(outcomes[2].is_cancelled());
    assert_eq!(*seen.lock().unwrap(), vec![33, 67, 100]);
}

#[test]
fn outcome_accessors() {
    let ok = LoadOutcome::Success(LoadedAsset::Font(ReadyFont {
        family: "Sans".to_string(),
        faces: 2,
    }));
    assert!(ok.asset().is_some());
    assert!(LoadOutcome::Failure("x".to_string()).asset().is_none());
    assert!(LoadOutcome::Cancelled.asset().is_none());
}
