use tempfile::TempDir;
use waymark_core::{PlaceStore, PlaceStoreBuilder};

/// Helper function to create a store backed by a fresh temporary directory
pub async fn create_test_store() -> (TempDir, PlaceStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("places.db");
    let store = PlaceStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}
