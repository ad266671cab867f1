//! Listing fetch against a mocked REST backend

use gojo_search::listings::{ListingsConfig, SupabaseListings};
use gojo_search::{PropertyType, SearchFilters};
use mockito::Matcher;

const LISTINGS: &str = r#"[
  {
    "id": "1",
    "host_id": "mock-host-1",
    "title": "Modern 2BR Apartment in Bole",
    "description": "Fully furnished apartment with city views.",
    "type": "residential",
    "price": 25000,
    "location": "Bole",
    "latitude": 8.9806,
    "longitude": 38.7578,
    "bedrooms": 2,
    "square_meters": 85,
    "features": ["Parking", "WiFi", "Security", "Furnished"],
    "images": [],
    "is_active": true,
    "created_at": "2024-01-15T10:00:00Z",
    "updated_at": "2024-01-15T10:00:00Z"
  }
]"#;

fn listings_for(url: String) -> SupabaseListings {
    SupabaseListings::new(ListingsConfig {
        url,
        anon_key: "anon".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_sends_filter_conditions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/properties")
        .match_header("apikey", "anon")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("is_active".into(), "eq.true".into()),
            Matcher::UrlEncoded("type".into(), "eq.residential".into()),
            Matcher::UrlEncoded("location".into(), "ilike.*Bole*".into()),
            Matcher::UrlEncoded("bedrooms".into(), "eq.2".into()),
            Matcher::UrlEncoded("order".into(), "created_at.desc".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LISTINGS)
        .create_async()
        .await;

    let filters = SearchFilters {
        property_type: Some(PropertyType::Residential),
        location: Some("Bole".to_string()),
        bedrooms: Some(2),
        ..Default::default()
    };
    let properties = listings_for(server.url()).fetch(&filters).await.unwrap();

    mock.assert_async().await;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].title, "Modern 2BR Apartment in Bole");
    assert_eq!(properties[0].property_type, PropertyType::Residential);
    assert!(filters.matches(&properties[0]));
}

#[tokio::test]
async fn test_fetch_reports_backend_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/properties")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let result = listings_for(server.url())
        .fetch(&SearchFilters::default())
        .await;

    assert!(result.is_err());
}
