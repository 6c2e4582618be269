//! Property-based tests for the cache consistency protocol

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::cache::{CacheClient, MemoryCache};
use crate::catalog::fakes::CountingStore;
use crate::catalog::{InvalidatingStore, InvalidationHook, MetricsReporter, PropertyCatalog};
use crate::models::{NewProperty, PropertyChanges};
use crate::store::PropertyStore;

#[derive(Debug, Clone)]
enum Op {
    Create { title: String, cents: i64 },
    Update { pick: usize, cents: i64 },
    Delete { pick: usize },
    Read,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-zA-Z ]{1,24}", 0i64..10_000_000).prop_map(|(title, cents)| Op::Create { title, cents }),
        (any::<usize>(), 0i64..10_000_000).prop_map(|(pick, cents)| Op::Update { pick, cents }),
        any::<usize>().prop_map(|pick| Op::Delete { pick }),
        Just(Op::Read),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // After any interleaving of writes and reads, the list served through the
    // cache matches the store exactly.
    #[test]
    fn prop_reads_reflect_every_write(ops in prop::collection::vec(op_strategy(), 1..40)) {
        tokio_test::block_on(async {
            let cache = Arc::new(MemoryCache::new());
            let counting = Arc::new(CountingStore::default());
            let store = InvalidatingStore::new(counting.clone(), InvalidationHook::new(cache.clone()));
            let catalog = PropertyCatalog::new(cache.clone(), counting.clone());

            for op in ops {
                let ids: Vec<i64> = counting.inner.get_all().await.unwrap().iter().map(|p| p.id).collect();
                match op {
                    Op::Create { title, cents } => {
                        store.create(NewProperty::new(title, "", Decimal::new(cents, 2), "")).await.unwrap();
                    }
                    Op::Update { pick, cents } if !ids.is_empty() => {
                        let changes = PropertyChanges { price: Some(Decimal::new(cents, 2)), ..Default::default() };
                        store.update(ids[pick % ids.len()], changes).await.unwrap();
                    }
                    Op::Delete { pick } if !ids.is_empty() => {
                        store.delete(ids[pick % ids.len()]).await.unwrap();
                    }
                    _ => {}
                }

                let served = catalog.fetch_all_properties().await.unwrap();
                let truth = counting.inner.get_all().await.unwrap();
                prop_assert_eq!(served, truth);
            }
            Ok(())
        })?;
    }

    // Every accessor call is exactly one cache lookup, and the reported ratio
    // stays within bounds.
    #[test]
    fn prop_metrics_account_for_every_read(reads in 1usize..30, writes_every in 1usize..6) {
        tokio_test::block_on(async {
            let cache = Arc::new(MemoryCache::new());
            let counting = Arc::new(CountingStore::default());
            let store = InvalidatingStore::new(counting.clone(), InvalidationHook::new(cache.clone()));
            let catalog = PropertyCatalog::new(cache.clone(), counting.clone());

            for i in 0..reads {
                if i % writes_every == 0 {
                    store.create(NewProperty::new(format!("P{}", i), "", Decimal::ONE, "")).await.unwrap();
                }
                catalog.fetch_all_properties().await.unwrap();
            }

            let stats = cache.aggregate_stats().await.unwrap();
            prop_assert_eq!(stats.total_requests(), reads as u64);
            prop_assert_eq!(stats.misses, counting.scans() as u64);

            let metrics = MetricsReporter::new(cache).report().await;
            prop_assert!((0.0..=100.0).contains(&metrics.hit_ratio));
            prop_assert_eq!(metrics.total_requests, reads as u64);
            Ok(())
        })?;
    }
}
