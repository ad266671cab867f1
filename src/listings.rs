use crate::models::{Property, PropertyType, SearchFilters};
use anyhow::{Context, Result};
use chrono::DateTime;
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// PostgREST query parameters equivalent to a set of filters.
///
/// Only active listings are returned, newest first. Location is a
/// case-insensitive contains match; bedrooms are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    params: Vec<(String, String)>,
}

impl ListingQuery {
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let mut params = vec![
            ("select".to_string(), "*".to_string()),
            ("is_active".to_string(), "eq.true".to_string()),
        ];
        let mut push = |column: &str, condition: String| {
            params.push((column.to_string(), condition));
        };

        if let Some(kind) = filters.property_type {
            push("type", format!("eq.{}", kind));
        }
        if let Some(location) = &filters.location {
            push("location", format!("ilike.*{}*", location));
        }
        if let Some(min) = filters.price_min {
            push("price", format!("gte.{}", min));
        }
        if let Some(max) = filters.price_max {
            push("price", format!("lte.{}", max));
        }
        if let Some(bedrooms) = filters.bedrooms {
            push("bedrooms", format!("eq.{}", bedrooms));
        }
        if let Some(sqm) = filters.square_meters_min {
            push("square_meters", format!("gte.{}", sqm));
        }
        push("order", "created_at.desc".to_string());

        Self { params }
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Connection settings for the hosted backend
#[derive(Debug, Clone)]
pub struct ListingsConfig {
    pub url: String,
    pub anon_key: String,
}

impl ListingsConfig {
    /// `SUPABASE_URL` and `SUPABASE_ANON_KEY`; `None` when either is missing
    /// or still the placeholder.
    pub fn from_env() -> Option<Self> {
        let url = env::var("SUPABASE_URL").ok()?;
        let anon_key = env::var("SUPABASE_ANON_KEY").ok()?;
        if url.is_empty() || anon_key.is_empty() || url == PLACEHOLDER_URL {
            return None;
        }
        Some(Self { url, anon_key })
    }
}

/// Reads listings from the backend's REST interface
pub struct SupabaseListings {
    client: Client,
    config: ListingsConfig,
}

impl SupabaseListings {
    pub fn new(config: ListingsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch active listings matching `filters`
    pub async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<Property>> {
        let url = format!("{}/rest/v1/properties", self.config.url.trim_end_matches('/'));
        let query = ListingQuery::from_filters(filters);

        debug!("Fetching listings: {} {:?}", url, query.params());

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .query(query.params())
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listings endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to decode listings")?;

        info!("Fetched {} listings", properties.len());
        Ok(properties)
    }
}

/// Active listings matching `filters`, newest first, mirroring what
/// `ListingQuery` asks of the backend.
pub fn filter_listings(properties: &[Property], filters: &SearchFilters) -> Vec<Property> {
    let mut matching: Vec<Property> = properties
        .iter()
        .filter(|p| p.is_active && filters.matches(p))
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matching
}

/// Built-in listings served when no backend is configured
pub fn sample_listings() -> Vec<Property> {
    // 2024-01-15T10:00:00Z, one listing per following day
    const FIRST_LISTED: i64 = 1_705_312_800;
    const DAY: i64 = 86_400;

    let listing = |index: i64,
                   title: &str,
                   property_type: PropertyType,
                   price: u64,
                   location: &str,
                   (latitude, longitude): (f64, f64),
                   bedrooms: Option<u32>,
                   square_meters: u32,
                   features: &[&str]| {
        let listed_at =
            DateTime::from_timestamp(FIRST_LISTED + index * DAY, 0).unwrap_or_default();
        Property {
            id: (index + 1).to_string(),
            host_id: format!("sample-host-{}", index + 1),
            title: title.to_string(),
            description: String::new(),
            property_type,
            price,
            location: location.to_string(),
            latitude,
            longitude,
            bedrooms,
            square_meters: Some(square_meters),
            features: features.iter().map(|f| f.to_string()).collect(),
            images: vec![],
            is_active: true,
            created_at: listed_at,
            updated_at: listed_at,
        }
    };

    vec![
        listing(
            0,
            "Modern 2BR Apartment in Bole",
            PropertyType::Residential,
            25_000,
            "Bole",
            (8.9806, 38.7578),
            Some(2),
            85,
            &["Parking", "Internet", "Security", "Furnished"],
        ),
        listing(
            1,
            "Executive Office Space in CMC",
            PropertyType::Business,
            45_000,
            "CMC",
            (9.0054, 38.7636),
            None,
            120,
            &["Conference Room", "Parking", "Security", "Reception Area"],
        ),
        listing(
            2,
            "Luxury 3BR Villa in Kazanchis",
            PropertyType::Residential,
            55_000,
            "Kazanchis",
            (9.0157, 38.7614),
            Some(3),
            180,
            &["Garden", "Parking", "Security", "Swimming Pool", "Furnished"],
        ),
        listing(
            3,
            "Cozy Studio in Old Airport",
            PropertyType::Residential,
            15_000,
            "Old Airport",
            (8.9806, 38.7578),
            Some(1),
            45,
            &["Internet", "Furnished", "Security"],
        ),
    ]
}
