//! Catalog page walk.
//!
//! The first page is the bare catalog URL. After each page, the pagination
//! links are inspected: if the collection has an entry at index
//! `next_page - 1`, page `next_page` is fetched as `<base>?page=<next_page>`.
//!
//! The index is zero-based while page numbers are one-based, so the check
//! passes when the link list is at least `next_page` long. A catalog whose
//! link list starts at page 1 ("1 2 3") therefore walks exactly its pages,
//! but a list with only forward links ("2 3") stops one page early.

use url::Url;

use crate::dom::Element;
use crate::error::ScraperError;
use crate::extract::extract_page;
use crate::model::ProductVariant;
use crate::selectors::CatalogSelectors;
use crate::source::DocumentSource;

/// Build the URL of page `page` by appending `page=<n>` to the base URL's query.
pub fn page_url(base_url: &str, page: usize) -> Result<String, ScraperError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ScraperError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url.to_string())
}

/// Fetch and extract every catalog page, in order.
///
/// Returns all variants found, duplicates included. A fetch failure aborts
/// the walk and discards what was gathered so far. Selectors are checked
/// before the first fetch.
pub async fn harvest<S: DocumentSource>(
    source: &S,
    base_url: &str,
    selectors: &CatalogSelectors,
) -> Result<Vec<ProductVariant>, ScraperError> {
    selectors.validate()?;

    let mut variants = Vec::new();
    let mut url = base_url.to_string();
    let mut next_page = 2;

    loop {
        log::info!("📄 Fetching page: {}", url);

        let document = source.fetch(&url).await?;
        let root = document.root_element();

        let found = extract_page(&root, selectors, base_url);
        log::debug!("Page yielded {} variant(s)", found.len());
        variants.extend(found);

        let links = Element::select(&root, &selectors.pagination_links);
        if links.get(next_page - 1).is_none() {
            log::debug!("No link at index {}, stopping", next_page - 1);
            break;
        }

        url = page_url(base_url, next_page)?;
        next_page += 1;
    }

    Ok(variants)
}
