//! Products domain module.
//!
//! Product records as supplied by the page-data provider, plus the pure view
//! model that turns a list of them into listing entries (no IO, no HTTP, no
//! markup).

pub mod listing;
pub mod product;

pub use listing::{
    ListingEntry, ProductEntry, ProductListing, ATTRIBUTION_LABEL, CURRENCY_PREFIX,
    DESCRIPTION_LABEL, FALLBACK_OWNER, LISTING_HEADING, PLACEHOLDER_MESSAGE,
};
pub use product::{NewProduct, Owner, PageData, Price, Product};
