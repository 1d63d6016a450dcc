use std::collections::HashSet;

use crate::model::ProductVariant;

/// Keep the first variant of each identity, preserving encounter order.
pub fn dedupe(variants: Vec<ProductVariant>) -> Vec<ProductVariant> {
    let mut seen = HashSet::new();
    let total = variants.len();

    let unique: Vec<ProductVariant> = variants
        .into_iter()
        .filter(|variant| seen.insert(variant.identity()))
        .collect();

    log::debug!("Dropped {} duplicate variant(s)", total - unique.len());
    unique
}
