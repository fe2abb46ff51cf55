use mockall::mock;

use super::{ProductReader, ProductWriter};
use crate::domain::product::{Product, ProductUpdate};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductRepository {}

    impl ProductReader for ProductRepository {
        fn get_product(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for ProductRepository {
        fn save_product(&self, product: &mut Product) -> RepositoryResult<()>;
        fn update_with_merge_detached(&self, product: &Product, update: &ProductUpdate) -> RepositoryResult<Product>;
        fn update_with_get_persistent(&self, product: &Product, update: &ProductUpdate) -> RepositoryResult<Product>;
        fn delete_product(&self, product: &Product) -> RepositoryResult<()>;
    }
}
