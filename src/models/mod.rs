use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of space a listing offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Residential,
    Business,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "residential",
            PropertyType::Business => "business",
        }
    }

    /// Parse the exact wire spelling, nothing else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "residential" => Some(PropertyType::Residential),
            "business" => Some(PropertyType::Business),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location picked on the map when a host creates a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
}

/// A rental listing as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub host_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: u64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub square_meters: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn location_data(&self) -> LocationData {
        LocationData {
            address: self.location.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            place_id: None,
            formatted_address: None,
        }
    }
}

/// Structured search filters. Absent fields mean "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(
        rename = "type",
        alias = "propertyType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_meters_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    /// Overlay `other` onto these filters: fields present in `other` win,
    /// absent ones leave the current value alone.
    pub fn merge(&mut self, other: SearchFilters) {
        if other.property_type.is_some() {
            self.property_type = other.property_type;
        }
        if other.location.is_some() {
            self.location = other.location;
        }
        if other.price_min.is_some() {
            self.price_min = other.price_min;
        }
        if other.price_max.is_some() {
            self.price_max = other.price_max;
        }
        if other.bedrooms.is_some() {
            self.bedrooms = other.bedrooms;
        }
        if other.square_meters_min.is_some() {
            self.square_meters_min = other.square_meters_min;
        }
        if !other.features.is_empty() {
            self.features = other.features;
        }
    }

    /// In-memory equivalent of the backend query built by `ListingQuery`
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(kind) = self.property_type {
            if property.property_type != kind {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !property
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if property.price > max {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            if property.bedrooms != Some(bedrooms) {
                return false;
            }
        }
        if let Some(sqm) = self.square_meters_min {
            match property.square_meters {
                Some(actual) if actual >= sqm => {}
                _ => return false,
            }
        }
        true
    }
}

/// Filters plus the query text they were read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterpretationResult {
    pub filters: SearchFilters,
    pub search_query: String,
    pub confidence: f64,
}
