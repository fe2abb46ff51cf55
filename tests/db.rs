use product_store::config::{PersistenceConfig, SchemaAction};
use product_store::db::bootstrap;
use product_store::domain::product::Product;
use product_store::repository::errors::RepositoryError;
use product_store::repository::{DieselRepository, ProductReader, ProductWriter};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let dir;
    {
        let test_db = common::TestDb::new("test_in_memory_connection.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        dir = test_db.dir().to_path_buf();
        assert!(std::path::Path::new(test_db.filename()).exists());
    }

    assert!(!dir.exists());
}

#[test]
fn bootstrap_create_keeps_existing_rows() {
    let test_db = common::TestDb::new("bootstrap_create.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.save_product(&mut Product::new("Biscuit", 8.37))
        .expect("save product");

    let config = PersistenceConfig::new(test_db.filename()).schema_action(SchemaAction::Create);
    let pool = bootstrap(&config).expect("bootstrap");
    let products = DieselRepository::new(pool)
        .list_products()
        .expect("list products");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Biscuit");
}

#[test]
fn bootstrap_drop_and_create_wipes_rows() {
    let test_db = common::TestDb::new("bootstrap_drop_and_create.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.save_product(&mut Product::new("Biscuit", 8.37))
        .expect("save product");
    drop(repo);

    let config = PersistenceConfig::new(test_db.filename())
        .schema_action(SchemaAction::DropAndCreate)
        .show_sql(true)
        .pool_size(2);
    let pool = bootstrap(&config).expect("bootstrap");
    let products = DieselRepository::new(pool)
        .list_products()
        .expect("list products");

    assert!(products.is_empty());
}

#[test]
fn bootstrap_none_leaves_fresh_database_without_tables() {
    let dir = tempfile::TempDir::new().expect("temporary directory");
    let path = dir.path().join("bootstrap_none.db");

    let config = PersistenceConfig::new(path.to_string_lossy()).schema_action(SchemaAction::None);
    let pool = bootstrap(&config).expect("bootstrap");

    let repo = DieselRepository::new(pool);
    let err = repo.list_products().expect_err("products table should not exist");
    assert!(matches!(err, RepositoryError::Database(_)));
}

#[test]
fn pool_switches_database_to_wal_journal() {
    let test_db = common::TestDb::new("pool_wal_journal.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.save_product(&mut Product::new("Kettle", 35.0))
        .expect("save product");

    let wal = format!("{}-wal", test_db.filename());
    assert!(std::path::Path::new(&wal).exists());
}
