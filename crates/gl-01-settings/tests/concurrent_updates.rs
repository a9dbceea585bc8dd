//! # Concurrent Settings Updates
//!
//! Merging under concurrency: edits to different fields of one community
//! must all survive, and communities must not interfere with each other.

use gl_01_settings::{InMemorySettingsStore, SettingsApi, SettingsNormalizer};
use serde_json::json;
use shared_types::CommunityId;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_field_edits_are_all_kept() {
    let service = Arc::new(SettingsNormalizer::new(Arc::new(
        InMemorySettingsStore::new(),
    )));
    let community = CommunityId::new("g1");

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let service = Arc::clone(&service);
            let community = community.clone();
            tokio::spawn(async move {
                service
                    .apply_update(&community, &format!("modules.m{}", i), json!("true"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let settings = service.get_settings(&community).await.unwrap().unwrap();
    for i in 0..64 {
        assert_eq!(
            settings.module_enabled(&format!("m{}", i)),
            Some(true),
            "edit m{} was lost",
            i
        );
    }
    assert_eq!(service.store().save_count(), 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn communities_are_independent() {
    let service = Arc::new(SettingsNormalizer::new(Arc::new(
        InMemorySettingsStore::new(),
    )));

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let community = CommunityId::new(format!("g{}", i));
                service
                    .apply_update(&community, "welcome", json!(i % 2 == 0))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.store().len(), 32);
    for i in 0..32 {
        let community = CommunityId::new(format!("g{}", i));
        let settings = service.get_settings(&community).await.unwrap().unwrap();
        assert_eq!(settings.module_enabled("welcome"), Some(i % 2 == 0));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn rejected_patches_interleaved_with_valid_ones() {
    let service = Arc::new(SettingsNormalizer::new(Arc::new(
        InMemorySettingsStore::new(),
    )));
    let community = CommunityId::new("g1");

    let handles: Vec<_> = (0..40)
        .map(|i| {
            let service = Arc::clone(&service);
            let community = community.clone();
            tokio::spawn(async move {
                let value = if i % 2 == 0 { json!(true) } else { json!(i) };
                service
                    .apply_update(&community, &format!("m{}", i), value)
                    .await
                    .is_ok()
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 20);
    assert_eq!(service.store().save_count(), 20);
    let settings = service.get_settings(&community).await.unwrap().unwrap();
    for i in 0..40 {
        let expected = if i % 2 == 0 { Some(true) } else { None };
        assert_eq!(settings.module_enabled(&format!("m{}", i)), expected);
    }
}
