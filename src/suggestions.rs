/// Example queries shown before the user types anything
pub const SEARCH_EXAMPLES: &[&str] = &[
    "2 bedroom apartment in Bole under 25,000 ETB",
    "Furnished office space near Meskel Square",
    "3 bedroom house in CMC with parking and garden",
    "Business space in Kazanchis with conference room",
    "Studio apartment in Old Airport area with WiFi",
    "Commercial property in Merkato with loading dock",
];

const MAX_SUGGESTIONS: usize = 5;

/// Completions for a partially typed query
pub fn generate_search_suggestions(partial_query: &str) -> Vec<String> {
    if partial_query.trim().is_empty() {
        return SEARCH_EXAMPLES.iter().map(|s| s.to_string()).collect();
    }

    let lower = partial_query.to_lowercase();
    let endings: &[&str] = if lower.contains("bed") {
        &["in Bole", "with parking", "furnished"]
    } else if lower.contains("office") || lower.contains("business") {
        &["with conference room", "in CMC", "with parking"]
    } else {
        &["in Bole", "in CMC", "with parking"]
    };

    endings
        .iter()
        .map(|ending| format!("{} {}", partial_query, ending))
        .take(MAX_SUGGESTIONS)
        .collect()
}
