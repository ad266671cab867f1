use crate::interpreters::traits::Interpreter;
use crate::interpreters::validate::validate_result;
use crate::interpreters::vocabulary::{
    within, ADDIS_AREAS, BEDROOMS_MAX, BUSINESS_KEYWORDS, FEATURE_KEYWORDS, LOCAL_CONFIDENCE,
    PRICE_CEILING, RESIDENTIAL_KEYWORDS, SQUARE_METERS_MAX,
};
use crate::models::{InterpretationResult, PropertyType, SearchFilters};
use async_trait::async_trait;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

static BEDROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*(?:bedroom|bed|br)").unwrap());

static PRICE_CEILING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"under\s*([0-9]+)[,\s]*([0-9]+)?\s*(?:etb|birr)?").unwrap()
});

static PRICE_FLOOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:above|over)\s*([0-9]+)[,\s]*([0-9]+)?\s*(?:etb|birr)?").unwrap()
});

static SQUARE_METERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(?:sqm|square\s*meter|m2|m²)").unwrap()
});

/// Keywords of two characters or fewer must stand alone ("ac" is not
/// air conditioning inside "space"); longer ones match as substrings.
enum KeywordMatch {
    Substring(&'static str),
    Word(Regex),
}

impl KeywordMatch {
    fn is_match(&self, text: &str) -> bool {
        match self {
            KeywordMatch::Substring(keyword) => text.contains(keyword),
            KeywordMatch::Word(pattern) => pattern.is_match(text),
        }
    }
}

const SHORT_KEYWORD_LEN: usize = 2;

static FEATURES: LazyLock<Vec<(KeywordMatch, &'static str)>> = LazyLock::new(|| {
    FEATURE_KEYWORDS
        .iter()
        .map(|&(keyword, label)| {
            let matcher = if keyword.len() <= SHORT_KEYWORD_LEN {
                let pattern = format!(r"\b{}\b", regex::escape(keyword));
                KeywordMatch::Word(Regex::new(&pattern).unwrap())
            } else {
                KeywordMatch::Substring(keyword)
            };
            (matcher, label)
        })
        .collect()
});

/// Rule-based extraction of search filters from free text.
///
/// Never fails: unrecognised or out-of-range input simply leaves the
/// corresponding filter unset. Numbers are dropped rather than clamped.
pub fn extract_locally(query: &str) -> InterpretationResult {
    let text = query.trim().to_lowercase();

    let filters = SearchFilters {
        property_type: extract_property_type(&text),
        location: extract_location(&text),
        price_min: PRICE_FLOOR_PATTERN
            .captures(&text)
            .and_then(|caps| normalize_price(&caps)),
        price_max: PRICE_CEILING_PATTERN
            .captures(&text)
            .and_then(|caps| normalize_price(&caps)),
        bedrooms: leading_number(&BEDROOMS, &text, BEDROOMS_MAX).map(|n| n as u32),
        square_meters_min: leading_number(&SQUARE_METERS, &text, SQUARE_METERS_MAX)
            .map(|n| n as u32),
        features: extract_features(&text),
    };

    debug!("Local extraction for {:?}: {:?}", query, filters);

    InterpretationResult {
        filters,
        search_query: query.to_string(),
        confidence: LOCAL_CONFIDENCE,
    }
}

fn extract_location(text: &str) -> Option<String> {
    ADDIS_AREAS
        .iter()
        .find(|area| text.contains(&area.to_lowercase()))
        .map(|area| area.to_string())
}

fn extract_property_type(text: &str) -> Option<PropertyType> {
    if BUSINESS_KEYWORDS.iter().any(|k| text.contains(k)) {
        Some(PropertyType::Business)
    } else if RESIDENTIAL_KEYWORDS.iter().any(|k| text.contains(k)) {
        Some(PropertyType::Residential)
    } else {
        None
    }
}

/// First match only; a later valid number does not rescue an invalid first one.
fn leading_number(pattern: &Regex, text: &str, ceiling: u64) -> Option<u64> {
    let caps = pattern.captures(text)?;
    let value = caps.get(1)?.as_str().parse::<u64>().ok()?;
    within(value, ceiling).then_some(value)
}

/// "25,000" and "25000" are taken literally, a lone one or two digit
/// number is read as thousands ("under 25" → 25 000).
fn normalize_price(caps: &Captures<'_>) -> Option<u64> {
    let lead = caps.get(1)?.as_str();
    let price = match caps.get(2) {
        Some(rest) => format!("{}{}", lead, rest.as_str()).parse::<u64>().ok()?,
        None => {
            let value = lead.parse::<u64>().ok()?;
            if lead.len() <= 2 {
                value * 1000
            } else {
                value
            }
        }
    };
    within(price, PRICE_CEILING).then_some(price)
}

fn extract_features(text: &str) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();
    for (matcher, label) in FEATURES.iter() {
        if matcher.is_match(text) && !features.iter().any(|f| f == label) {
            features.push(label.to_string());
        }
    }
    features
}

/// Interpreter that never leaves the process
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalInterpreter;

#[async_trait]
impl Interpreter for LocalInterpreter {
    async fn interpret(&self, query: &str) -> InterpretationResult {
        validate_result(&extract_locally(query))
    }

    fn source_name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedroom_apartment_with_price_ceiling() {
        let result = extract_locally("2 bedroom apartment in Bole under 25,000 ETB");
        assert_eq!(
            result.filters,
            SearchFilters {
                property_type: Some(PropertyType::Residential),
                location: Some("Bole".to_string()),
                bedrooms: Some(2),
                price_max: Some(25_000),
                ..Default::default()
            }
        );
        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.search_query, "2 bedroom apartment in Bole under 25,000 ETB");
    }

    #[test]
    fn test_office_near_landmark() {
        let result = extract_locally("office space near Meskel Square");
        assert_eq!(
            result.filters,
            SearchFilters {
                property_type: Some(PropertyType::Business),
                location: Some("Meskel Square".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_features_in_vocabulary_order() {
        let result = extract_locally("furnished 3 bed house in CMC with parking and garden");
        assert_eq!(result.filters.property_type, Some(PropertyType::Residential));
        assert_eq!(result.filters.location.as_deref(), Some("CMC"));
        assert_eq!(result.filters.bedrooms, Some(3));
        assert_eq!(
            result.filters.features,
            vec!["Furnished", "Parking", "Garden"]
        );
    }

    #[test]
    fn test_empty_query() {
        let result = extract_locally("");
        assert!(result.filters.is_empty());
        assert_eq!(result.search_query, "");
        assert_eq!(result.confidence, 0.7);

        let blank = extract_locally("   ");
        assert!(blank.filters.is_empty());
        assert_eq!(blank.search_query, "   ");
    }

    #[test]
    fn test_out_of_range_bedrooms_dropped() {
        let result = extract_locally("15 bedroom mansion");
        assert_eq!(result.filters.bedrooms, None);
        assert_eq!(extract_locally("0 br flat").filters.bedrooms, None);
        assert_eq!(extract_locally("10 br flat").filters.bedrooms, Some(10));
    }

    #[test]
    fn test_short_price_read_as_thousands() {
        assert_eq!(extract_locally("under 25").filters.price_max, Some(25_000));
        assert_eq!(extract_locally("under 5 birr").filters.price_max, Some(5_000));
        assert_eq!(extract_locally("under 25000").filters.price_max, Some(25_000));
        assert_eq!(extract_locally("under 250 etb").filters.price_max, Some(250));
    }

    #[test]
    fn test_price_bounds() {
        assert_eq!(
            extract_locally("under 1,000000").filters.price_max,
            Some(1_000_000)
        );
        assert_eq!(extract_locally("under 2000000").filters.price_max, None);
        assert_eq!(extract_locally("under 0").filters.price_max, None);
    }

    #[test]
    fn test_price_floor_above_and_over() {
        assert_eq!(
            extract_locally("house above 10,000 birr").filters.price_min,
            Some(10_000)
        );
        assert_eq!(extract_locally("flat over 15").filters.price_min, Some(15_000));
        assert_eq!(extract_locally("overlooking the city").filters.price_min, None);
    }

    #[test]
    fn test_square_meters() {
        assert_eq!(
            extract_locally("office 120 sqm").filters.square_meters_min,
            Some(120)
        );
        assert_eq!(
            extract_locally("80 square meter flat").filters.square_meters_min,
            Some(80)
        );
        assert_eq!(extract_locally("90m²").filters.square_meters_min, Some(90));
        assert_eq!(extract_locally("5000 m2 warehouse").filters.square_meters_min, None);
    }

    #[test]
    fn test_business_wins_over_residential() {
        let result = extract_locally("commercial apartment building");
        assert_eq!(result.filters.property_type, Some(PropertyType::Business));
    }

    #[test]
    fn test_feature_synonyms_deduplicated() {
        let result = extract_locally("studio with wifi, internet, pool and swimming pool, ac");
        assert_eq!(
            result.filters.features,
            vec!["Internet", "Swimming Pool", "Air Conditioning"]
        );
    }

    #[test]
    fn test_first_area_in_vocabulary_wins() {
        let result = extract_locally("between piassa and bole");
        assert_eq!(result.filters.location.as_deref(), Some("Bole"));
        let result = extract_locally("OLD AIRPORT villa");
        assert_eq!(result.filters.location.as_deref(), Some("Old Airport"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let query = "Furnished 2 br in Kazanchis above 20 ETB with gym, 100 sqm";
        assert_eq!(extract_locally(query), extract_locally(query));
    }

    #[test]
    fn test_longer_keywords_match_inside_words() {
        assert_eq!(
            extract_locally("flat with pools").filters.features,
            vec!["Swimming Pool"]
        );
        assert_eq!(
            extract_locally("flat with pools and balconies, free parking.").filters.features,
            vec!["Parking", "Swimming Pool"]
        );
        assert_eq!(
            extract_locally("office with conferences and a receptionist").filters.features,
            vec!["Conference Room", "Reception Area"]
        );
    }

    #[test]
    fn test_short_keywords_need_word_boundaries() {
        assert!(extract_locally("quiet space in Bole").filters.features.is_empty());
        assert_eq!(
            extract_locally("studio with AC").filters.features,
            vec!["Air Conditioning"]
        );
    }

    #[tokio::test]
    async fn test_local_interpreter_output_is_validated() {
        let interpreter = LocalInterpreter;
        let query = "3 bedroom house in Lideta";
        assert_eq!(interpreter.interpret(query).await, extract_locally(query));
        assert_eq!(interpreter.source_name(), "local");
    }

    #[tokio::test]
    async fn test_local_interpreter_orders_inverted_prices() {
        let query = "house above 30 under 20";
        let raw = extract_locally(query);
        assert_eq!(raw.filters.price_min, Some(30_000));
        assert_eq!(raw.filters.price_max, Some(20_000));

        let result = LocalInterpreter.interpret(query).await;
        assert_eq!(result.filters.price_min, Some(20_000));
        assert_eq!(result.filters.price_max, Some(30_000));
        assert_eq!(result, validate_result(&raw));
    }
}
