use bastion_core::{Database, Shop, ShopBuilder};
use tempfile::TempDir;

/// Helper function to create a shop backed by a temporary database
pub fn create_test_shop() -> (TempDir, Shop<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let shop = ShopBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create shop");
    (temp_dir, shop)
}

/// Reopens the shop stored in `temp_dir`, as a fresh process would
pub fn reopen_shop(temp_dir: &TempDir) -> Shop<Database> {
    ShopBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to reopen shop")
}
