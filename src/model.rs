use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sellable (listing, colour) combination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductVariant {
    pub title: String,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "capacityMB")]
    pub capacity_mb: Option<u64>,
    pub colour: String,
    #[serde(rename = "availabilityText")]
    pub availability_text: String,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
    #[serde(rename = "shippingText")]
    pub shipping_text: Option<String>,
    #[serde(rename = "shippingDate")]
    pub shipping_date: Option<NaiveDate>,
}

/// Dedup key: title, colour, capacity and price.
///
/// Price is compared by bit pattern so the key can be hashed. Prices are
/// never negative or NaN after normalization, so bitwise equality matches
/// numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantIdentity {
    title: String,
    colour: String,
    capacity_mb: Option<u64>,
    price_bits: u64,
}

impl ProductVariant {
    pub fn identity(&self) -> VariantIdentity {
        VariantIdentity {
            title: self.title.clone(),
            colour: self.colour.clone(),
            capacity_mb: self.capacity_mb,
            price_bits: self.price.to_bits(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_variant(title: &str, colour: &str, capacity_mb: Option<u64>, price: f64) -> ProductVariant {
    ProductVariant {
        title: title.to_string(),
        price,
        image_url: "https://example.com/catalog/images/phone.png".to_string(),
        capacity_mb,
        colour: colour.to_string(),
        availability_text: "In Stock".to_string(),
        is_available: true,
        shipping_text: Some("Delivers 2024-03-05".to_string()),
        shipping_date: NaiveDate::from_ymd_opt(2024, 3, 5),
    }
}
