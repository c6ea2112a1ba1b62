//! Deal catalog data model
//!
//! The catalog is a fixed, ordered set of deals supplied once at startup and
//! shared read-only across the search pipeline.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single discounted item in the catalog
///
/// Field names follow the JSON catalog format; `featured` also accepts the
/// legacy `isHotDeal` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Unique identifier within the catalog
    pub id: String,

    /// Item title
    pub title: String,

    /// Brand name
    pub brand: String,

    /// Price before discount, in whole rupees
    pub original_price: u32,

    /// Price after discount, in whole rupees
    pub discounted_price: u32,

    /// Discount percentage
    pub discount: u8,

    /// Descriptive text
    pub description: String,

    /// Source platform label (e.g. "Myntra")
    pub platform: String,

    /// Highlighted as a featured deal
    #[serde(default, alias = "isHotDeal")]
    pub featured: bool,
}

/// Fixed, read-only deal catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    deals: Vec<Deal>,
}

impl Catalog {
    /// Create a catalog from an ordered deal list
    #[must_use]
    pub const fn new(deals: Vec<Deal>) -> Self {
        Self { deals }
    }

    /// Load a catalog from a JSON file holding an array of deals
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, the JSON is malformed, or
    /// two deals share an identifier
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deals: Vec<Deal> = serde_json::from_str(&content)?;

        let mut seen = HashSet::new();
        for deal in &deals {
            if !seen.insert(deal.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate deal id: {}", deal.id)));
            }
        }

        tracing::debug!(path = %path.display(), deals = deals.len(), "loaded catalog");
        Ok(Self { deals })
    }

    /// All deals in catalog order
    #[must_use]
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Look up a deal by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Deal> {
        self.deals.iter().find(|deal| deal.id == id)
    }

    /// Number of deals in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.deals.len()
    }

    /// Whether the catalog holds no deals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Built-in demo catalog
    #[must_use]
    pub fn sample() -> Self {
        let deal = |id: &str,
                    title: &str,
                    brand: &str,
                    original_price: u32,
                    discounted_price: u32,
                    discount: u8,
                    description: &str,
                    platform: &str,
                    featured: bool| Deal {
            id: id.to_string(),
            title: title.to_string(),
            brand: brand.to_string(),
            original_price,
            discounted_price,
            discount,
            description: description.to_string(),
            platform: platform.to_string(),
            featured,
        };

        Self::new(vec![
            deal(
                "1",
                "Cotton Slim Fit Casual Shirt",
                "Allen Solly",
                2499,
                1249,
                50,
                "Premium cotton fabric with modern slim fit. Perfect for casual outings.",
                "Myntra",
                true,
            ),
            deal(
                "2",
                "Floral Print Maxi Dress",
                "FabIndia",
                3999,
                1999,
                50,
                "Elegant floral print with comfortable fit. Made from breathable fabric.",
                "Ajio",
                false,
            ),
            deal(
                "3",
                "Denim Jacket - Blue",
                "Levi's",
                4999,
                2999,
                40,
                "Classic denim jacket with vintage wash. Durable and stylish.",
                "Amazon",
                true,
            ),
            deal(
                "4",
                "Formal Trousers - Black",
                "Peter England",
                1999,
                999,
                50,
                "Comfortable formal trousers with perfect fit. Wrinkle-free fabric.",
                "Flipkart",
                false,
            ),
            deal(
                "5",
                "Ethnic Kurta Set",
                "Manyavar",
                5999,
                3599,
                40,
                "Traditional kurta with modern touch. Perfect for festive occasions.",
                "Myntra",
                false,
            ),
            deal(
                "6",
                "Sports Track Pants",
                "Puma",
                2499,
                1499,
                40,
                "Comfortable track pants with moisture-wicking technology.",
                "Ajio",
                true,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_has_unique_ids() {
        let catalog = Catalog::sample();
        let mut seen = HashSet::new();
        for deal in catalog.deals() {
            assert!(seen.insert(deal.id.clone()), "duplicate id {}", deal.id);
        }
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::sample();
        let deal = catalog.get("3").unwrap();
        assert_eq!(deal.brand, "Levi's");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn deal_deserializes_from_camel_case() {
        let json = r#"{
            "id": "7",
            "title": "Canvas Sneakers",
            "brand": "Converse",
            "originalPrice": 3499,
            "discountedPrice": 2099,
            "discount": 40,
            "description": "Classic high tops.",
            "platform": "Amazon",
            "isHotDeal": true
        }"#;

        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.original_price, 3499);
        assert!(deal.featured);
    }

    #[test]
    fn featured_defaults_to_false() {
        let json = r#"{
            "id": "8",
            "title": "Linen Shirt",
            "brand": "Fabindia",
            "originalPrice": 1999,
            "discountedPrice": 1499,
            "discount": 25,
            "description": "Breathable summer wear.",
            "platform": "Ajio"
        }"#;

        let deal: Deal = serde_json::from_str(json).unwrap();
        assert!(!deal.featured);
    }
}
