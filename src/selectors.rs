use scraper::Selector;

use crate::error::ScraperError;

/// CSS selectors for the parts of a catalog page
#[derive(Debug, Clone)]
pub struct CatalogSelectors {
    /// Container for one listing
    pub listing: String,
    pub title: String,
    pub capacity: String,
    pub price: String,
    /// Image element carrying a `src` attribute
    pub image: String,
    /// Small text lines; the first is availability, the last is shipping
    pub note: String,
    /// One element per colour, each carrying `colour_attr`
    pub colour: String,
    pub colour_attr: String,
    /// Links inside the pagination container
    pub pagination_links: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            listing: ".product".to_string(),
            title: ".text-blue-600.my-4.text-xl.block.text-center".to_string(),
            capacity: ".product-capacity".to_string(),
            price: ".my-8.block.text-center.text-lg".to_string(),
            image: "img[src]".to_string(),
            note: ".text-sm.block.text-center".to_string(),
            colour: "[data-colour]".to_string(),
            colour_attr: "data-colour".to_string(),
            pagination_links: "#pages a".to_string(),
        }
    }
}

impl CatalogSelectors {
    /// Checks every selector parses, so a typo fails before the first fetch.
    pub fn validate(&self) -> Result<(), ScraperError> {
        for selector in [
            &self.listing,
            &self.title,
            &self.capacity,
            &self.price,
            &self.image,
            &self.note,
            &self.colour,
            &self.pagination_links,
        ] {
            Selector::parse(selector)
                .map_err(|e| ScraperError::InvalidSelector(format!("{}: {}", selector, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CatalogSelectors::default().validate().is_ok());
    }

    #[test]
    fn broken_selector_is_reported() {
        let selectors = CatalogSelectors {
            price: "div[".to_string(),
            ..CatalogSelectors::default()
        };
        let err = selectors.validate().unwrap_err();
        assert!(matches!(err, ScraperError::InvalidSelector(ref s) if s.starts_with("div[")));
    }
}
