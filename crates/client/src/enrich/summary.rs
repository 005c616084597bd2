//! One-line result summaries.

use esearch_core::EnrichedResult;

/// Group an integer's digits in threes with commas: `1234567` -> `1,234,567`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse the provider's textual total count.
///
/// Thousands separators are ignored. Anything unparseable counts as 0.
pub(crate) fn parse_total_results(raw: &str) -> u64 {
    let digits: String = raw.trim().chars().filter(|c| *c != ',').collect();
    digits.parse().unwrap_or_else(|_| {
        tracing::warn!(total_results = raw, "unparseable total result count, using 0");
        0
    })
}

/// Summary sentence for a result list.
pub fn generate_summary(query: &str, results: &[EnrichedResult], total_results: u64) -> String {
    let Some(top) = results.first() else {
        return format!("No results found for \"{query}\"");
    };

    format!(
        "Found {} results for \"{query}\". Showing top {}. Most relevant: {} ({})",
        format_thousands(total_results),
        results.len(),
        top.title,
        top.display_url
    )
}
