use std::collections::HashMap;
use std::fmt;

use crate::db::DbConnection;
use crate::domain::product::{Product, ProductUpdate};
use crate::models::product::UpdateProduct as DbUpdateProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::product::{
    delete_product_by_id, find_product, insert_product, update_product,
};
use crate::repository::unit_of_work::run_in_transaction;

/// A long-lived session that keeps one connection for its whole lifetime.
///
/// Products saved or loaded through the session stay managed: later calls on
/// the same session see the same instance and can change or remove it
/// without re-reading or merging it. Each call still runs in its own
/// transaction, and the tracked state only changes once that transaction has
/// committed.
///
/// The session is owned by a single caller and every operation needs
/// `&mut self`, so it cannot be shared between concurrent units of work.
pub struct ProductSession {
    conn: DbConnection,
    managed: HashMap<i32, Product>,
}

impl fmt::Debug for ProductSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductSession")
            .field("managed", &self.managed.len())
            .finish_non_exhaustive()
    }
}

impl ProductSession {
    pub(crate) fn new(conn: DbConnection) -> Self {
        Self {
            conn,
            managed: HashMap::new(),
        }
    }

    /// Persist a transient product; it becomes managed by this session.
    pub fn save(&mut self, product: &mut Product) -> RepositoryResult<()> {
        if let Some(id) = product.id {
            return Err(RepositoryError::AlreadySaved(id));
        }

        let created = run_in_transaction(&mut self.conn, |conn| insert_product(conn, product))?;
        product.id = created.id;

        if let Some(id) = created.id {
            self.managed.insert(id, created);
        }
        Ok(())
    }

    /// Return the managed product with `id`, loading it on first access.
    pub fn get(&mut self, id: i32) -> RepositoryResult<Option<&Product>> {
        if !self.managed.contains_key(&id) {
            match run_in_transaction(&mut self.conn, |conn| find_product(conn, id))? {
                Some(product) => {
                    self.managed.insert(id, product);
                }
                None => return Ok(None),
            }
        }

        Ok(self.managed.get(&id))
    }

    /// Apply `update` to the managed product with `id` and write it back.
    pub fn update(&mut self, id: i32, update: &ProductUpdate) -> RepositoryResult<Product> {
        let Some(managed) = self.managed.get(&id) else {
            return Err(RepositoryError::Detached(id));
        };

        let mut changed = managed.clone();
        changed.apply(update);

        let updated = run_in_transaction(&mut self.conn, |conn| {
            update_product(conn, id, &DbUpdateProduct::from(&changed))
        })?;

        self.managed.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a managed product from the store without looking it up first.
    pub fn delete(&mut self, product: &Product) -> RepositoryResult<()> {
        let id = product.id.ok_or(RepositoryError::Transient)?;
        if !self.managed.contains_key(&id) {
            return Err(RepositoryError::Detached(id));
        }

        run_in_transaction(&mut self.conn, |conn| delete_product_by_id(conn, id))?;
        self.managed.remove(&id);
        Ok(())
    }

    pub fn is_managed(&self, id: i32) -> bool {
        self.managed.contains_key(&id)
    }

    pub fn managed_count(&self) -> usize {
        self.managed.len()
    }

    /// Detach every product tracked by the session.
    pub fn clear(&mut self) {
        self.managed.clear();
    }
}
