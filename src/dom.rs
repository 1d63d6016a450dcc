//! Minimal node interface the extractor and pagination controller rely on.

use scraper::{ElementRef, Selector};

/// Read-only view of one markup element.
pub trait Element: Sized {
    /// Descendants matching `selector`, in document order.
    fn select(&self, selector: &str) -> Vec<Self>;

    fn attr(&self, name: &str) -> Option<String>;

    /// Text content with whitespace runs collapsed and ends trimmed.
    fn text(&self) -> String;
}

impl<'a> Element for ElementRef<'a> {
    fn select(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(parsed) => ElementRef::select(self, &parsed).collect(),
            Err(e) => {
                log::error!("Invalid selector '{}': {}", selector, e);
                Vec::new()
            }
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        ElementRef::text(self)
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
