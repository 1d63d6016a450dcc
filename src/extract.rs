//! Listing extraction: one [`ProductVariant`] per colour of each listing.

use crate::dom::Element;
use crate::error::ScraperError;
use crate::model::ProductVariant;
use crate::normalize::{
    capacity_to_mb, clean_availability_text, extract_shipping_date, is_available, parse_price,
    resolve_image_url, NOT_AVAILABLE,
};
use crate::selectors::CatalogSelectors;

/// Extract every variant on a catalog page, in document order.
///
/// Listings missing their title, price or image are skipped with a warning.
pub fn extract_page<N: Element>(
    page: &N,
    selectors: &CatalogSelectors,
    base_url: &str,
) -> Vec<ProductVariant> {
    let mut variants = Vec::new();

    for (index, listing) in page.select(&selectors.listing).iter().enumerate() {
        match extract_listing(listing, selectors, base_url) {
            Ok(found) => {
                log::debug!("Listing {} yielded {} variant(s)", index, found.len());
                variants.extend(found);
            }
            Err(e) => log::warn!("Skipping listing {}: {}", index, e),
        }
    }

    variants
}

/// Extract the colour variants of a single listing.
pub fn extract_listing<N: Element>(
    listing: &N,
    selectors: &CatalogSelectors,
    base_url: &str,
) -> Result<Vec<ProductVariant>, ScraperError> {
    let title = first_text(listing, &selectors.title).ok_or(ScraperError::MissingField {
        field: "title",
    })?;
    let price = first_text(listing, &selectors.price)
        .map(|raw| parse_price(&raw))
        .ok_or(ScraperError::MissingField { field: "price" })?;
    let image_src = listing
        .select(&selectors.image)
        .first()
        .and_then(|img| img.attr("src"))
        .ok_or(ScraperError::MissingField { field: "image" })?;
    let image_url = resolve_image_url(base_url, &image_src);
    let capacity_mb = first_text(listing, &selectors.capacity).and_then(|raw| capacity_to_mb(&raw));

    // With a single note, it doubles as availability and shipping text.
    let notes = listing.select(&selectors.note);
    let availability_text = notes
        .first()
        .map(|node| clean_availability_text(&node.text()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let shipping_text = notes
        .last()
        .map(|node| node.text())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let shipping_date = extract_shipping_date(&shipping_text);
    let available = is_available(&availability_text);

    let variants = listing
        .select(&selectors.colour)
        .iter()
        .filter_map(|node| node.attr(&selectors.colour_attr))
        .map(|colour| ProductVariant {
            title: title.clone(),
            price,
            image_url: image_url.clone(),
            capacity_mb,
            colour,
            availability_text: availability_text.clone(),
            is_available: available,
            shipping_text: Some(shipping_text.clone()),
            shipping_date,
        })
        .collect();

    Ok(variants)
}

fn first_text<N: Element>(node: &N, selector: &str) -> Option<String> {
    node.select(selector).first().map(Element::text)
}
