//! Partitioned-parallel aggregation through merge

use fsdump::Error;
use fsdump::services::batch::drain_parallel;
use std::sync::{Arc, Mutex};

#[test]
fn test_parallel_drain_delivers_every_item_once() {
    const ITEMS: u32 = 1000;
    const BATCH: usize = 16;

    let delivered: Arc<Mutex<Vec<Vec<u32>>>> = Arc::new(Mutex::new(Vec::new()));
    let items: Vec<u32> = (0..ITEMS).collect();

    drain_parallel(items, BATCH, || {
        let delivered = Arc::clone(&delivered);
        move |batch: Vec<u32>| {
            delivered.lock().expect("lock").push(batch);
            Ok(())
        }
    })
    .expect("parallel drain");

    let batches = delivered.lock().expect("lock");

    // No batch exceeds the bound, and none is empty.
    for batch in batches.iter() {
        assert!(!batch.is_empty());
        assert!(batch.len() <= BATCH);
    }

    // Every item appears exactly once across all batches.
    let mut seen: Vec<u32> = batches.iter().flatten().copied().collect();
    assert_eq!(seen.len(), ITEMS as usize);
    seen.sort_unstable();
    assert_eq!(seen, (0..ITEMS).collect::<Vec<u32>>());
}

#[test]
fn test_parallel_drain_empty_input() {
    let delivered: Arc<Mutex<Vec<Vec<u32>>>> = Arc::new(Mutex::new(Vec::new()));

    drain_parallel(Vec::new(), 8, || {
        let delivered = Arc::clone(&delivered);
        move |batch: Vec<u32>| {
            delivered.lock().expect("lock").push(batch);
            Ok(())
        }
    })
    .expect("parallel drain of nothing");

    assert!(delivered.lock().expect("lock").is_empty());
}

#[test]
fn test_parallel_drain_surfaces_sink_failure() {
    let items: Vec<u32> = (0..64).collect();

    let result = drain_parallel(items, 1, || {
        |_batch: Vec<u32>| Err(Error::Sink(std::io::Error::other("disk full")))
    });

    assert!(result.is_err());
}
