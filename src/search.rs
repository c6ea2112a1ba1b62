//! Query-to-results matching
//!
//! A pure substring filter over the fixed catalog. No state, no side effects;
//! identical inputs always yield identical, order-identical output.

use crate::catalog::Deal;

/// Filter the catalog down to deals matching the query
///
/// A deal is included when the lowercased query is a substring of its
/// lowercased title, brand, or description. The empty query matches every
/// deal. Catalog order is preserved; there is no re-ranking.
///
/// Whitespace is matched literally rather than trimmed, since recognition
/// engines can hand back whitespace-only transcripts.
#[must_use]
pub fn filter_deals<'a>(deals: &'a [Deal], query: &str) -> Vec<&'a Deal> {
    if query.is_empty() {
        return deals.iter().collect();
    }

    let needle = query.to_lowercase();
    deals
        .iter()
        .filter(|deal| {
            deal.title.to_lowercase().contains(&needle)
                || deal.brand.to_lowercase().contains(&needle)
                || deal.description.to_lowercase().contains(&needle)
        })
        .collect()
}
