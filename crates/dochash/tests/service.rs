//! The actor front-end gives the same answers as the direct API, and
//! serializes concurrent callers.

use std::sync::Arc;

use dochash::{DocumentHasher, HasherConfig, HasherError, HasherService, Identity};
use dochash_testkit::{identities, init_tracing};

fn spawn() -> (
    dochash::HasherHandle,
    tokio::task::JoinHandle<DocumentHasher>,
) {
    let hasher = DocumentHasher::in_memory(Identity::new("deployer"), HasherConfig::default())
        .expect("valid config");
    HasherService::spawn(hasher)
}

#[tokio::test]
async fn lifecycle_through_handle() -> anyhow::Result<()> {
    init_tracing();
    let (handle, task) = spawn();
    let a1 = Identity::new("A1");

    let d1 = handle.create(a1.clone(), "A1", "1", "file").await?;
    assert_eq!(handle.read(a1.clone(), "A1", "1").await?, d1);

    let d2 = handle.update(a1.clone(), "A1", "1", "File").await?;
    assert_ne!(d1, d2);

    handle.change_owner(a1.clone(), "A1", "1", "2").await?;
    let err = handle.read(a1.clone(), "A1", "1").await.unwrap_err();
    assert!(matches!(err, HasherError::NotAuthorized { .. }));

    assert!(!handle.verify_by_content("A1", "1", "file").await?);
    assert!(handle.verify_by_content("A1", "1", "File").await?);
    assert!(handle.verify_by_digest("A1", d2).await?);
    assert!(handle.verify_digest_at("A1", "1", d2).await?);
    assert_eq!(handle.describe(Identity::new("2"), "A1", "1").await?.revision, 2);

    handle.shutdown().await?;
    let hasher = task.await?;
    assert_eq!(hasher.len()?, 1);
    Ok(())
}

#[tokio::test]
async fn errors_cross_the_channel() {
    let (handle, _task) = spawn();
    let err = handle
        .read(Identity::new("A1"), "A1", "missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn closed_service_reports_closed() {
    let (handle, task) = spawn();
    handle.shutdown().await.unwrap();
    task.await.unwrap();

    let err = handle
        .create(Identity::new("A1"), "A1", "1", "file")
        .await
        .unwrap_err();
    assert!(matches!(err, HasherError::ServiceClosed));
}

#[tokio::test]
async fn dropping_all_handles_stops_service() {
    let (handle, task) = spawn();
    handle
        .create(Identity::new("A1"), "A1", "1", "file")
        .await
        .unwrap();
    drop(handle);

    let hasher = task.await.unwrap();
    assert_eq!(hasher.len().unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_transfers_have_one_winner() {
    let (handle, task) = spawn();
    let a1 = Identity::new("A1");
    handle.create(a1.clone(), "A1", "1", "file").await.unwrap();

    let handle = Arc::new(handle);
    let racers: Vec<_> = identities(16)
        .into_iter()
        .map(|taker| {
            let handle = Arc::clone(&handle);
            let a1 = a1.clone();
            tokio::spawn(async move { handle.change_owner(a1, "A1", "1", taker).await })
        })
        .collect();

    let mut wins = 0;
    for racer in racers {
        match racer.await.unwrap() {
            Ok(()) => wins += 1,
            Err(e) => assert!(e.is_not_authorized()),
        }
    }
    assert_eq!(wins, 1);

    handle.shutdown().await.unwrap();
    task.await.unwrap();
}
