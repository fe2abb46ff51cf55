use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain representation of a sellable product.
///
/// A product built with [`Product::new`] is transient: it has no identifier
/// until it is saved, at which point the backend assigns one that never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend-generated identifier, `None` until the product is first saved.
    pub id: Option<i32>,
    /// Human-readable name of the product.
    pub name: String,
    /// Price of the product.
    pub price: f64,
}

impl Product {
    /// Build a transient product that has not been saved yet.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }

    /// Whether the product has never been saved.
    pub fn is_transient(&self) -> bool {
        self.id.is_none()
    }

    /// Overwrite the mutable fields with the values carried by `update`.
    pub fn apply(&mut self, update: &ProductUpdate) {
        self.name.clone_from(&update.name);
        self.price = update.price;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Product{{id={id}, name='{}', price={}}}", self.name, self.price),
            None => write!(f, "Product{{id=null, name='{}', price={}}}", self.name, self.price),
        }
    }
}

/// Desired new values for an existing product.
///
/// Carries no identity and is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    /// New product name.
    pub name: String,
    /// New product price.
    pub price: f64,
}

impl ProductUpdate {
    /// Build an update payload with the given name and price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_is_transient() {
        let product = Product::new("Shampoo", 3.37);
        assert!(product.is_transient());
        assert_eq!(product.to_string(), "Product{id=null, name='Shampoo', price=3.37}");
    }

    #[test]
    fn apply_keeps_identifier() {
        let mut product = Product {
            id: Some(4),
            name: "Chocolate".to_string(),
            price: 4.5,
        };
        product.apply(&ProductUpdate::new("Biscuit", 6.0));

        assert_eq!(product.id, Some(4));
        assert_eq!(product.name, "Biscuit");
        assert_eq!(product.price, 6.0);
        assert_eq!(product.to_string(), "Product{id=4, name='Biscuit', price=6}");
    }
}
