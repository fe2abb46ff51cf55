use crate::domain::product::{Product, ProductUpdate};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductReader, ProductWriter};

/// Facade over a product repository.
///
/// Each method forwards to the matching repository operation and returns its
/// result unchanged.
#[derive(Debug, Clone)]
pub struct ProductService<R> {
    repo: R,
}

impl<R> ProductService<R>
where
    R: ProductReader + ProductWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get(&self, id: i32) -> RepositoryResult<Option<Product>> {
        self.repo.get_product(id)
    }

    pub fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        self.repo.list_products()
    }

    pub fn save(&self, product: &mut Product) -> RepositoryResult<()> {
        self.repo.save_product(product)
    }

    pub fn update_with_merge_detached(
        &self,
        product: &Product,
        update: &ProductUpdate,
    ) -> RepositoryResult<Product> {
        self.repo.update_with_merge_detached(product, update)
    }

    pub fn update_with_get_persistent(
        &self,
        product: &Product,
        update: &ProductUpdate,
    ) -> RepositoryResult<Product> {
        self.repo.update_with_get_persistent(product, update)
    }

    pub fn delete(&self, product: &Product) -> RepositoryResult<()> {
        self.repo.delete_product(product)
    }
}
