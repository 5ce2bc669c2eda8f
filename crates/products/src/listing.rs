//! Product listing view model.
//!
//! Turns the page data's product list into listing entries: a single
//! placeholder when there is nothing to show, otherwise one entry per product
//! in input order. The listing only borrows the products; it never sorts,
//! filters, or mutates them.
//!
//! Optional fields follow presence rules, not truthiness: a price of `0` is
//! shown, a missing price is not.

use std::collections::HashSet;

use adopta_core::ProductId;

use crate::product::{Price, Product};

pub const LISTING_HEADING: &str = "Products";
pub const PLACEHOLDER_MESSAGE: &str = "No products registered.";
pub const FALLBACK_OWNER: &str = "Aliado";
pub const CURRENCY_PREFIX: &str = "$";
pub const DESCRIPTION_LABEL: &str = "Description:";
pub const ATTRIBUTION_LABEL: &str = "Registered by:";

/// Listing over a borrowed product slice.
#[derive(Debug, Clone, Copy)]
pub struct ProductListing<'a> {
    products: &'a [Product],
}

impl<'a> ProductListing<'a> {
    /// An absent list behaves exactly like an empty one.
    pub fn build(products: Option<&'a [Product]>) -> Self {
        Self {
            products: products.unwrap_or(&[]),
        }
    }

    pub fn heading(&self) -> &'static str {
        LISTING_HEADING
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of product entries (the placeholder is not counted).
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn entries(&self) -> Vec<ListingEntry<'a>> {
        if self.products.is_empty() {
            return vec![ListingEntry::Placeholder];
        }

        self.products
            .iter()
            .map(|product| ListingEntry::Product(ProductEntry { product }))
            .collect()
    }

    /// Ids that appear more than once, in order of their second occurrence.
    pub fn duplicate_keys(&self) -> Vec<ProductId> {
        let mut seen = HashSet::with_capacity(self.products.len());
        let mut reported = HashSet::new();
        let mut dupes = Vec::new();

        for product in self.products {
            if !seen.insert(product.id) && reported.insert(product.id) {
                dupes.push(product.id);
            }
        }

        dupes
    }
}

/// One rendered row of the listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingEntry<'a> {
    Placeholder,
    Product(ProductEntry<'a>),
}

impl<'a> ListingEntry<'a> {
    pub fn as_product(&self) -> Option<&ProductEntry<'a>> {
        match self {
            ListingEntry::Product(entry) => Some(entry),
            ListingEntry::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListingEntry::Placeholder)
    }

    /// Placeholder message, if this is the placeholder row.
    pub fn placeholder_message(&self) -> Option<&'static str> {
        match self {
            ListingEntry::Placeholder => Some(PLACEHOLDER_MESSAGE),
            ListingEntry::Product(_) => None,
        }
    }
}

/// Display rules for a single product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductEntry<'a> {
    product: &'a Product,
}

impl<'a> ProductEntry<'a> {
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// List key.
    pub fn key(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &'a str {
        &self.product.name
    }

    /// Description value, omitted when absent or empty.
    pub fn description(&self) -> Option<&'a str> {
        self.product
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
    }

    pub fn description_line(&self) -> Option<String> {
        self.description()
            .map(|d| format!("{DESCRIPTION_LABEL} {d}"))
    }

    pub fn price(&self) -> Option<Price> {
        self.product.price
    }

    pub fn price_line(&self) -> Option<String> {
        self.price().map(|p| format!("{CURRENCY_PREFIX}{p}"))
    }

    /// Owner name, or the fallback label when none (or an empty one) was given.
    pub fn owner_name(&self) -> &'a str {
        self.product
            .owner_name()
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_OWNER)
    }

    pub fn attribution_line(&self) -> String {
        format!("{ATTRIBUTION_LABEL} {}", self.owner_name())
    }
}
