use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Displayable, Identifiable, NamedEntity};
use crate::errors::{InventoryError, Result};

/// Represents a purchased lot of clothing subdivided into items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bundle {
    pub id: Uuid,
    pub name: String,
    pub category: BundleCategory,
    /// Acquisition cost of the whole lot.
    pub total_cost: f64,
    /// Piece count of the lot, used only to derive the default per-item cost.
    pub total_pieces: u32,
    pub created_at: DateTime<Utc>,
}

impl Bundle {
    pub fn new(
        name: impl Into<String>,
        category: BundleCategory,
        total_cost: f64,
        total_pieces: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            total_cost,
            total_pieces,
            created_at: Utc::now(),
        }
    }

    /// Default cost attributed to a single piece of the lot.
    ///
    /// A zero piece count would divide by zero; such a bundle is rejected as
    /// malformed instead of producing a non-finite amount.
    pub fn cost_per_piece(&self) -> Result<f64> {
        if self.total_pieces == 0 {
            return Err(InventoryError::MalformedBundle(format!(
                "bundle `{}` has zero pieces",
                self.name
            )));
        }
        Ok(self.total_cost / self.total_pieces as f64)
    }
}

impl Identifiable for Bundle {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Bundle {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Bundle {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.category.label())
    }
}

/// Enumerates the supported bundle classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BundleCategory {
    Jackets,
    Hoodies,
    #[serde(rename = "T-Shirts")]
    TShirts,
    Mixed,
}

impl BundleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BundleCategory::Jackets => "Jackets",
            BundleCategory::Hoodies => "Hoodies",
            BundleCategory::TShirts => "T-Shirts",
            BundleCategory::Mixed => "Mixed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "jackets" => Some(BundleCategory::Jackets),
            "hoodies" => Some(BundleCategory::Hoodies),
            "t-shirts" | "tshirts" => Some(BundleCategory::TShirts),
            "mixed" => Some(BundleCategory::Mixed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_per_piece_divides_evenly() {
        let bundle = Bundle::new("Lot A", BundleCategory::Mixed, 6000.0, 20);
        assert_eq!(bundle.cost_per_piece().unwrap(), 300.0);
    }

    #[test]
    fn zero_pieces_is_malformed() {
        let bundle = Bundle::new("Broken", BundleCategory::Jackets, 1000.0, 0);
        assert!(matches!(
            bundle.cost_per_piece(),
            Err(InventoryError::MalformedBundle(_))
        ));
    }

    #[test]
    fn category_round_trips_through_serde_rename() {
        let json = serde_json::to_string(&BundleCategory::TShirts).unwrap();
        assert_eq!(json, "\"T-Shirts\"");
        let parsed: BundleCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BundleCategory::TShirts);
    }
}
