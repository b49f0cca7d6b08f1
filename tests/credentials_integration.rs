use omnipanel::credentials::{CredentialError, CredentialStore, FileCredentialStore};
use std::fs;

#[tokio::test]
async fn test_missing_file_has_no_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileCredentialStore::new(dir.path().join("keys.json"));

    assert_eq!(store.load("alice").await.unwrap(), None);
}

#[tokio::test]
async fn test_save_survives_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("keys.json");

    let store = FileCredentialStore::new(&path);
    store.save("alice", "sk-alice").await.unwrap();
    store.save("bob", "sk-bob").await.unwrap();
    store.save("alice", "sk-alice-2").await.unwrap();

    let reopened = FileCredentialStore::new(&path);
    assert_eq!(
        reopened.load("alice").await.unwrap().as_deref(),
        Some("sk-alice-2")
    );
    assert_eq!(reopened.load("bob").await.unwrap().as_deref(), Some("sk-bob"));

    let on_disk: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(on_disk["alice"], "sk-alice-2");
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_concurrent_saves_keep_every_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(FileCredentialStore::new(dir.path().join("keys.json")));

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = std::sync::Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.save(&format!("client-{i}"), &format!("sk-{i}")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..8 {
        assert_eq!(
            store.load(&format!("client-{i}")).await.unwrap(),
            Some(format!("sk-{i}"))
        );
    }
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys.json");
    fs::write(&path, "not json").unwrap();

    let store = FileCredentialStore::new(&path);
    let err = store.load("alice").await.unwrap_err();
    assert!(matches!(err, CredentialError::Json(_)));
}
