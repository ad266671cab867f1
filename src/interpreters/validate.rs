use crate::interpreters::vocabulary::{
    within, BEDROOMS_MAX, DEFAULT_CONFIDENCE, PRICE_CEILING, SQUARE_METERS_MAX,
};
use crate::models::{InterpretationResult, PropertyType, SearchFilters};
use serde_json::Value;
use tracing::debug;

/// Turn any candidate payload into a trustworthy `InterpretationResult`.
///
/// Total over every JSON value: fields that are missing, mistyped or out of
/// range are omitted, never defaulted. When both prices survive but are
/// inverted they are swapped so that `price_min <= price_max`.
pub fn validate(candidate: &Value, original_query: &str) -> InterpretationResult {
    let raw = candidate.get("filters").unwrap_or(&Value::Null);

    let mut filters = SearchFilters {
        property_type: ["type", "propertyType"]
            .iter()
            .find_map(|key| raw.get(key)?.as_str().and_then(PropertyType::parse)),
        location: raw
            .get("location")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        price_min: bounded(raw.get("priceMin"), PRICE_CEILING),
        price_max: bounded(raw.get("priceMax"), PRICE_CEILING),
        bedrooms: bounded(raw.get("bedrooms"), BEDROOMS_MAX).map(|n| n as u32),
        square_meters_min: bounded(raw.get("squareMetersMin"), SQUARE_METERS_MAX)
            .map(|n| n as u32),
        features: raw
            .get("features")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    };

    if let (Some(min), Some(max)) = (filters.price_min, filters.price_max) {
        if min > max {
            debug!("Swapping inverted price range {}..{}", min, max);
            filters.price_min = Some(max);
            filters.price_max = Some(min);
        }
    }

    let search_query = candidate
        .get("searchQuery")
        .and_then(Value::as_str)
        .unwrap_or(original_query)
        .to_string();

    let confidence = candidate
        .get("confidence")
        .and_then(Value::as_f64)
        .map(|c| c.clamp(0.0, 1.0))
        .unwrap_or(DEFAULT_CONFIDENCE);

    InterpretationResult {
        filters,
        search_query,
        confidence,
    }
}

/// Re-validate an already typed result, e.g. the local extractor's output.
pub fn validate_result(result: &InterpretationResult) -> InterpretationResult {
    let candidate = serde_json::to_value(result).unwrap_or_default();
    validate(&candidate, &result.search_query)
}

/// Integral number in `(0, ceiling]`. Fractional values are rejected.
fn bounded(value: Option<&Value>, ceiling: u64) -> Option<u64> {
    let value = value?;
    if let Some(n) = value.as_u64() {
        return within(n, ceiling).then_some(n);
    }
    let n = value.as_f64()?;
    if n.fract() != 0.0 || n <= 0.0 || n > ceiling as f64 {
        return None;
    }
    Some(n as u64)
}
