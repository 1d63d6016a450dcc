//! End-to-end tests for `HttpSource` and the catalog walk.
//!
//! Uses `wiremock` to serve catalog pages locally so no real network
//! traffic is made.

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalog_harvester::{
    dedupe, harvest, CatalogSelectors, DocumentSource, HttpSource, ScraperError,
};

fn test_source() -> HttpSource {
    HttpSource::new(5, None).expect("failed to build test HttpSource")
}

fn listing(title: &str, capacity: &str, price: &str, colours: &[&str], notes: &[&str]) -> String {
    let colours: String = colours
        .iter()
        .map(|c| format!(r#"<span data-colour="{c}"></span>"#))
        .collect();
    let notes: String = notes
        .iter()
        .map(|n| format!(r#"<div class="text-sm block text-center">{n}</div>"#))
        .collect();
    format!(
        r#"<div class="product">
            <h3><span class="text-blue-600 my-4 text-xl block text-center">{title}</span>
            <span class="product-capacity">{capacity}</span></h3>
            <img src="../images/phone.png">
            <div class="my-8 block text-center text-lg">{price}</div>
            {colours}{notes}
        </div>"#
    )
}

fn page(listings: &[String], links: usize) -> String {
    let links: String = (1..=links)
        .map(|n| format!(r#"<a href="?page={n}">{n}</a>"#))
        .collect();
    format!(
        "<html><body>{}<div id=\"pages\">{}</div></body></html>",
        listings.concat(),
        links
    )
}

async fn mount_html(server: &MockServer, page_param: Option<&str>, body: String) {
    let mock = Mock::given(method("GET")).and(path("/catalog"));
    let mock = match page_param {
        Some(n) => mock.and(query_param("page", n)),
        None => mock.and(query_param_is_missing("page")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_parses_html() {
    let server = MockServer::start().await;
    mount_html(&server, None, page(&[], 0)).await;

    let document = test_source()
        .fetch(&format!("{}/catalog", server.uri()))
        .await
        .expect("fetch should succeed");

    let selector = scraper::Selector::parse("#pages").unwrap();
    assert_eq!(document.select(&selector).count(), 1);
}

#[tokio::test]
async fn non_success_status_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = test_source()
        .fetch(&format!("{}/catalog", server.uri()))
        .await;

    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus, got an unexpected result"
    );
}

#[tokio::test]
async fn unreachable_host_is_fetch_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}/catalog");

    let result = test_source().fetch(&url).await;
    assert!(matches!(result, Err(ScraperError::Fetch { .. })));
}

#[tokio::test]
async fn harvests_and_dedupes_two_pages() {
    let server = MockServer::start().await;
    let base = format!("{}/catalog", server.uri());

    let iphone = listing(
        "iPhone 11",
        "64GB",
        "£399.00",
        &["Black", "White"],
        &["Availability: In Stock", "Delivers by Tuesday 5th March 2024"],
    );
    let galaxy = listing(
        "Galaxy S20",
        "128 GB",
        "£649.99",
        &["Blue"],
        &["Availability: Out of Stock", "Available 2024-04-01"],
    );

    mount_html(&server, None, page(&[iphone.clone()], 2)).await;
    mount_html(&server, Some("2"), page(&[iphone, galaxy], 2)).await;

    let variants = harvest(&test_source(), &base, &CatalogSelectors::default())
        .await
        .expect("harvest should succeed");
    assert_eq!(variants.len(), 5);

    let unique = dedupe(variants);
    let summary: Vec<(&str, &str)> = unique
        .iter()
        .map(|v| (v.title.as_str(), v.colour.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("iPhone 11", "Black"),
            ("iPhone 11", "White"),
            ("Galaxy S20", "Blue"),
        ]
    );

    let galaxy = &unique[2];
    assert_eq!(galaxy.capacity_mb, Some(131_072));
    assert_eq!(galaxy.price, 649.99);
    assert!(!galaxy.is_available);
    assert_eq!(galaxy.shipping_date.map(|d| d.to_string()).as_deref(), Some("2024-04-01"));
    assert_eq!(galaxy.image_url, format!("{}/images/phone.png", base));
}
