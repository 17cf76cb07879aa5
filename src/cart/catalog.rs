// Copyright (c) 2025 - Cowboy AI, Inc.
//! Product catalog used to enrich cart events

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub sku: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, sku: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            sku: sku.into(),
        }
    }
}

/// Read-only product lookup by SKU
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog stocked with the demo products `SKRCT` and `SKGHF`
    pub fn demo() -> Self {
        Self::new()
            .with_product(Product::new("RaceCar Toy", 34.34, "SKRCT"))
            .with_product(Product::new("Gaming Headphones", 19.34, "SKGHF"))
    }

    /// Add or replace a product, keyed by its SKU
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.sku.clone(), product);
        self
    }

    /// Look up a product by SKU
    pub fn lookup(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
