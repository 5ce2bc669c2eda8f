//! Page-data provider: where the listing's products come from.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, RwLock};

use anyhow::Context;
use thiserror::Error;

use adopta_core::{DomainError, DomainResult, ProductId};
use adopta_products::{NewProduct, PageData, Product};

/// Failure while registering a product.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The payload or the catalog state rejected the product.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing store cannot be used (e.g. a poisoned lock).
    #[error("product catalog is unavailable")]
    Unavailable,
}

/// Ordered product catalog.
///
/// `list` returns products in registration order; that order is what the
/// listing displays.
pub trait ProductSource: Send + Sync {
    fn list(&self) -> Vec<Product>;
    fn get(&self, id: ProductId) -> Option<Product>;
    /// Assign the next id and append.
    fn register(&self, product: NewProduct) -> Result<Product, SourceError>;
}

impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn register(&self, product: NewProduct) -> Result<Product, SourceError> {
        (**self).register(product)
    }
}

/// In-memory catalog for dev/tests.
#[derive(Debug, Default)]
pub struct InMemoryProductSource {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records. Names must be non-empty and ids unique.
    pub fn with_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        Ok(Self {
            inner: RwLock::new(products),
        })
    }

    /// A page-data object with no `products` key seeds an empty catalog.
    pub fn from_page_data(data: PageData) -> DomainResult<Self> {
        Self::with_products(data.products.unwrap_or_default())
    }

    /// Load a JSON seed file in page-data shape.
    pub fn load_seed(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let data: PageData = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))?;

        let source = Self::from_page_data(data)
            .with_context(|| format!("invalid products in seed file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "seed file loaded");
        Ok(source)
    }
}

impl ProductSource for InMemoryProductSource {
    fn list(&self) -> Vec<Product> {
        match self.inner.read() {
            Ok(products) => products.clone(),
            Err(_) => vec![],
        }
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        let products = self.inner.read().ok()?;
        products.iter().find(|p| p.id == id).cloned()
    }

    fn register(&self, product: NewProduct) -> Result<Product, SourceError> {
        product.validate()?;

        let mut products = self.inner.write().map_err(|_| SourceError::Unavailable)?;

        let id = match products.iter().map(|p| p.id).max() {
            None => ProductId::new(1),
            Some(max) => max
                .next()
                .ok_or_else(|| DomainError::conflict("product id space exhausted"))?,
        };

        let product = product.into_product(id)?;
        products.push(product.clone());
        Ok(product)
    }
}
