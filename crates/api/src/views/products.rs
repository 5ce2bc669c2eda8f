//! Product listing markup.
//!
//! ```text
//! <h1>Products</h1>
//! <ul class="product-listing">
//!   <li class="product" data-product-id="1">
//!     <strong class="product__name">Collar</strong>
//!     <p class="product__price">$15</p>
//!     <p class="product__owner">Registered by: Aliado</p>
//!   </li>
//! </ul>
//! ```

use maud::{html, Markup};

use adopta_products::{ListingEntry, ProductEntry, ProductListing, PLACEHOLDER_MESSAGE};

use crate::views::layout;

/// Heading + list fragment.
pub fn render_listing(listing: &ProductListing<'_>) -> Markup {
    html! {
        h1 { (listing.heading()) }
        ul class="product-listing" {
            @for entry in listing.entries() {
                @match entry {
                    ListingEntry::Placeholder => {
                        li class="product-listing__empty" { (PLACEHOLDER_MESSAGE) }
                    }
                    ListingEntry::Product(row) => {
                        (render_entry(&row))
                    }
                }
            }
        }
    }
}

fn render_entry(row: &ProductEntry<'_>) -> Markup {
    html! {
        li class="product" data-product-id=(row.key().to_string()) {
            strong class="product__name" { (row.name()) }
            @if let Some(line) = row.description_line() {
                p class="product__description" { (line) }
            }
            @if let Some(line) = row.price_line() {
                p class="product__price" { (line) }
            }
            p class="product__owner" { (row.attribution_line()) }
        }
    }
}

/// Full HTML document for the listing page.
pub fn listing_page(listing: &ProductListing<'_>) -> Markup {
    layout::page(listing.heading(), render_listing(listing))
}

#[cfg(test)]
mod tests {
    use adopta_core::ProductId;
    use adopta_products::{Owner, PageData, Price, Product};

    use super::*;

    fn render(products: Option<&[Product]>) -> String {
        render_listing(&ProductListing::build(products)).into_string()
    }

    #[test]
    fn empty_listing_renders_placeholder_only() {
        let out = render(None);

        assert!(out.contains("<h1>Products</h1>"));
        assert_eq!(out.matches(r#"class="product-listing__empty""#).count(), 1);
        assert!(out.contains(PLACEHOLDER_MESSAGE));
        assert_eq!(out.matches(r#"class="product""#).count(), 0);
    }

    #[test]
    fn renders_scenario_entries_in_order() {
        let data: PageData = serde_json::from_str(
            r#"{"products": [
                {"id": 1, "name": "Collar", "price": 15},
                {"id": 2, "name": "Cama", "description": "Talla M"}
            ]}"#,
        )
        .unwrap();
        let out = render(data.products());

        assert_eq!(out.matches(r#"class="product""#).count(), 2);
        assert!(!out.contains("product-listing__empty"));

        let collar = out.find(r#"data-product-id="1""#).unwrap();
        let cama = out.find(r#"data-product-id="2""#).unwrap();
        assert!(collar < cama);

        let (first, second) = out.split_at(cama);
        assert!(first.contains(r#"<strong class="product__name">Collar</strong>"#));
        assert!(first.contains(r#"<p class="product__price">$15</p>"#));
        assert!(!first.contains("Description:"));
        assert!(first.contains("Registered by: Aliado"));

        assert!(second.contains(r#"<p class="product__description">Description: Talla M</p>"#));
        assert!(!second.contains("product__price"));
        assert!(second.contains("Registered by: Aliado"));
    }

    #[test]
    fn zero_price_and_owner_are_rendered() {
        let items = vec![
            Product::new(ProductId::new(5), "Manta")
                .with_price(Price::new(0.0).unwrap())
                .with_owner(Owner::named("Refugio Esperanza")),
        ];
        let out = render(Some(items.as_slice()));

        assert!(out.contains(r#"<p class="product__price">$0</p>"#));
        assert!(out.contains("Registered by: Refugio Esperanza"));
    }

    #[test]
    fn user_text_is_escaped() {
        let items = vec![
            Product::new(ProductId::new(1), "<script>alert(1)</script>")
                .with_description("a & b")
                .with_owner(Owner::named("\"Refugio\"")),
        ];
        let out = render(Some(items.as_slice()));

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(out.contains("Description: a &amp; b"));
        assert!(out.contains("Registered by: &quot;Refugio&quot;"));
    }

    #[test]
    fn listing_page_is_a_full_document() {
        let out = listing_page(&ProductListing::build(None)).into_string();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Products</title>"));
        assert!(out.contains(PLACEHOLDER_MESSAGE));
    }
}
