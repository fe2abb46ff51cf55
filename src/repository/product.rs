use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::product::{Product as DomainProduct, ProductUpdate as DomainProductUpdate},
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, RestoredProduct as DbRestoredProduct,
        UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductReader, ProductWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ProductReader for DieselRepository {
    fn get_product(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        self.run_in_transaction(|conn| find_product(conn, id))
    }

    fn list_products(&self) -> RepositoryResult<Vec<DomainProduct>> {
        self.run_in_transaction(|conn| {
            use crate::schema::products;

            let db_products = products::table
                .order(products::id.asc())
                .load::<DbProduct>(conn)?;

            Ok(db_products.into_iter().map(Into::into).collect())
        })
    }
}

impl ProductWriter for DieselRepository {
    fn save_product(&self, product: &mut DomainProduct) -> RepositoryResult<()> {
        if let Some(id) = product.id {
            return Err(RepositoryError::AlreadySaved(id));
        }

        let created = self.run_in_transaction(|conn| insert_product(conn, product))?;
        product.id = created.id;
        log::debug!("Saved {product}");
        Ok(())
    }

    fn update_with_merge_detached(
        &self,
        product: &DomainProduct,
        update: &DomainProductUpdate,
    ) -> RepositoryResult<DomainProduct> {
        self.run_in_transaction(|conn| {
            let merged = merge_detached(conn, product)?;
            let id = merged.id.ok_or(RepositoryError::Transient)?;
            let updated = update_product(conn, id, &DbUpdateProduct::from(update))?;
            log::debug!("Updated {updated} after merging a detached copy");
            Ok(updated)
        })
    }

    fn update_with_get_persistent(
        &self,
        product: &DomainProduct,
        update: &DomainProductUpdate,
    ) -> RepositoryResult<DomainProduct> {
        let id = product.id.ok_or(RepositoryError::Transient)?;

        self.run_in_transaction(|conn| {
            let mut persistent = find_product(conn, id)?.ok_or(RepositoryError::NotFound)?;
            persistent.apply(update);
            let updated = update_product(conn, id, &DbUpdateProduct::from(&persistent))?;
            log::debug!("Updated {updated} from its persistent row");
            Ok(updated)
        })
    }

    fn delete_product(&self, product: &DomainProduct) -> RepositoryResult<()> {
        let id = product.id.ok_or(RepositoryError::Transient)?;

        self.run_in_transaction(|conn| delete_product_by_id(conn, id))?;
        log::debug!("Deleted product {id}");
        Ok(())
    }
}

/// Primary-key lookup of a single product.
pub(crate) fn find_product(
    conn: &mut SqliteConnection,
    id: i32,
) -> RepositoryResult<Option<DomainProduct>> {
    use crate::schema::products;

    let product = products::table
        .find(id)
        .first::<DbProduct>(conn)
        .optional()?;

    Ok(product.map(Into::into))
}

/// Insert the name and price of `product` as a new row.
pub(crate) fn insert_product(
    conn: &mut SqliteConnection,
    product: &DomainProduct,
) -> RepositoryResult<DomainProduct> {
    use crate::schema::products;

    let created = diesel::insert_into(products::table)
        .values(&DbNewProduct::from(product))
        .get_result::<DbProduct>(conn)?;

    Ok(created.into())
}

pub(crate) fn update_product(
    conn: &mut SqliteConnection,
    id: i32,
    changes: &DbUpdateProduct<'_>,
) -> RepositoryResult<DomainProduct> {
    use crate::schema::products;

    let updated = diesel::update(products::table.find(id))
        .set(changes)
        .get_result::<DbProduct>(conn)?;

    Ok(updated.into())
}

/// Delete the row addressed by `id` without reading it first.
pub(crate) fn delete_product_by_id(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<()> {
    use crate::schema::products;

    let deleted = diesel::delete(products::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Reconcile a detached product with the store and return its managed state.
///
/// An existing row receives the detached field values. A row that no longer
/// exists is re-inserted under the same identifier. A transient product is
/// inserted with a fresh identifier.
fn merge_detached(
    conn: &mut SqliteConnection,
    detached: &DomainProduct,
) -> RepositoryResult<DomainProduct> {
    use crate::schema::products;

    let Some(id) = detached.id else {
        return insert_product(conn, detached);
    };

    match find_product(conn, id)? {
        Some(persistent) if persistent == *detached => Ok(persistent),
        Some(_) => update_product(conn, id, &DbUpdateProduct::from(detached)),
        None => {
            log::debug!("Product {id} no longer exists, re-inserting the detached copy");
            let restored = diesel::insert_into(products::table)
                .values(&DbRestoredProduct {
                    id,
                    name: detached.name.as_str(),
                    price: detached.price,
                })
                .get_result::<DbProduct>(conn)?;
            Ok(restored.into())
        }
    }
}
