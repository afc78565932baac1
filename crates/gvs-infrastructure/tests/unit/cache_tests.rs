//! Performance cache behavior tests

use gvs_infrastructure::cache::PerformanceCache;
use std::time::Duration;

#[tokio::test]
async fn get_returns_stored_value_before_ttl() {
    let cache = PerformanceCache::with_config(10, Duration::from_secs(60));
    cache.set("k", &vec![1, 2, 3], None).await.unwrap();

    let value: Option<Vec<i32>> = cache.get("k").await.unwrap();
    assert_eq!(value, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn entry_expires_after_its_ttl() {
    let cache = PerformanceCache::with_config(10, Duration::from_secs(60));
    cache
        .set("k", &"v", Some(Duration::from_millis(20)))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    let value: Option<String> = cache.get("k").await.unwrap();
    assert_eq!(value, None);

    // Expired entry is removed, not just hidden
    let stats = cache.stats().await;
    assert_eq!(stats.size, 0);
}

#[tokio::test]
async fn per_entry_ttl_overrides_default() {
    let cache = PerformanceCache::with_config(10, Duration::from_millis(20));
    cache
        .set("long", &"v", Some(Duration::from_secs(60)))
        .await
        .unwrap();
    cache.set("short", &"v", None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(cache.get::<String>("short").await.unwrap(), None);
    assert_eq!(
        cache.get::<String>("long").await.unwrap(),
        Some("v".to_string())
    );
}

#[tokio::test]
async fn size_never_exceeds_capacity() {
    let cache = PerformanceCache::with_config(3, Duration::from_secs(60));
    for i in 0..10 {
        cache.set(&format!("k{}", i), &i, None).await.unwrap();
    }

    let stats = cache.stats().await;
    assert_eq!(stats.size, 3);
    assert_eq!(stats.evictions, 7);
}

#[tokio::test]
async fn get_protects_an_entry_from_lru_eviction() {
    let cache = PerformanceCache::with_config(2, Duration::from_secs(60));
    cache.set("a", &1, None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    cache.set("b", &2, None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    // Touch "a" so "b" becomes the least recently used entry
    let _: Option<i32> = cache.get("a").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    cache.set("c", &3, None).await.unwrap();

    assert_eq!(cache.get::<i32>("a").await.unwrap(), Some(1));
    assert_eq!(cache.get::<i32>("b").await.unwrap(), None);
    assert_eq!(cache.get::<i32>("c").await.unwrap(), Some(3));
}

#[tokio::test]
async fn overwriting_an_existing_key_does_not_evict() {
    let cache = PerformanceCache::with_config(2, Duration::from_secs(60));
    cache.set("a", &1, None).await.unwrap();
    cache.set("b", &2, None).await.unwrap();
    cache.set("a", &10, None).await.unwrap();

    let stats = cache.stats().await;
    assert_eq!(stats.size, 2);
    assert_eq!(stats.evictions, 0);
    assert_eq!(cache.get::<i32>("a").await.unwrap(), Some(10));
}

#[tokio::test]
async fn stats_track_hits_and_misses() {
    let cache = PerformanceCache::with_config(10, Duration::from_secs(60));
    cache.set("k", &"v", None).await.unwrap();

    let _: Option<String> = cache.get("k").await.unwrap();
    let _: Option<String> = cache.get("k").await.unwrap();
    let _: Option<String> = cache.get("absent").await.unwrap();

    let stats = cache.stats().await;
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn clear_empties_entries_but_keeps_counters() {
    let cache = PerformanceCache::with_config(10, Duration::from_secs(60));
    cache.set("k", &"v", None).await.unwrap();
    let _: Option<String> = cache.get("k").await.unwrap();

    cache.clear().await.unwrap();

    let stats = cache.stats().await;
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hits, 1);
    assert_eq!(cache.get::<String>("k").await.unwrap(), None);
}
