use diesel::prelude::*;

use crate::domain::product::{Product as DomainProduct, ProductUpdate as DomainProductUpdate};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: f64,
}

/// Row re-inserted under an identifier the caller already holds.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct RestoredProduct<'a> {
    pub id: i32,
    pub name: &'a str,
    pub price: f64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            price: value.price,
        }
    }
}

impl<'a> From<&'a DomainProduct> for NewProduct<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price,
        }
    }
}

impl<'a> From<&'a DomainProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price,
        }
    }
}

impl<'a> From<&'a DomainProductUpdate> for UpdateProduct<'a> {
    fn from(value: &'a DomainProductUpdate) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price,
        }
    }
}
