use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::bundle::Bundle;
use crate::domain::{Displayable, Identifiable, NamedEntity};
use crate::errors::Result;

/// One piece of clothing belonging to a bundle, individually priced and sold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub bundle_id: Uuid,
    pub name: String,
    pub selling_price: f64,
    /// Overrides the bundle-derived per-piece cost when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    pub size: String,
    pub condition: ItemCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_notes: Option<String>,
    pub source: ItemSource,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(bundle_id: Uuid, name: impl Into<String>, selling_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            bundle_id,
            name: name.into(),
            selling_price,
            estimated_cost: None,
            size: String::new(),
            condition: ItemCondition::Good,
            issue_notes: None,
            source: ItemSource::Mine,
            status: ItemStatus::Available,
            sold_date: None,
            sold_price: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_condition(mut self, condition: ItemCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_source(mut self, source: ItemSource) -> Self {
        self.source = source;
        self
    }

    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }

    pub fn is_sold(&self) -> bool {
        self.status == ItemStatus::Sold
    }

    /// Flips the item to Sold, recording when and for how much.
    pub fn mark_sold(&mut self, date: NaiveDate, price: f64) {
        self.status = ItemStatus::Sold;
        self.sold_date = Some(date);
        self.sold_price = Some(price);
    }

    /// Reverts the item to Available. Sold fields are cleared so their
    /// presence always tracks the Sold status.
    pub fn mark_available(&mut self) {
        self.status = ItemStatus::Available;
        self.sold_date = None;
        self.sold_price = None;
    }

    /// Cost attributed to this item: the explicit estimate when present,
    /// otherwise the owning bundle's per-piece cost.
    pub fn effective_cost(&self, bundle: &Bundle) -> Result<f64> {
        match self.estimated_cost {
            Some(cost) => Ok(cost),
            None => bundle.cost_per_piece(),
        }
    }
}

impl Identifiable for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Item {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.status.label())
    }
}

/// Physical condition of a piece.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemCondition {
    #[serde(rename = "As New")]
    AsNew,
    Excellent,
    Good,
    #[serde(rename = "With Issue")]
    WithIssue,
    Reject,
}

impl ItemCondition {
    pub fn label(&self) -> &'static str {
        match self {
            ItemCondition::AsNew => "As New",
            ItemCondition::Excellent => "Excellent",
            ItemCondition::Good => "Good",
            ItemCondition::WithIssue => "With Issue",
            ItemCondition::Reject => "Reject",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "as new" | "as-new" | "asnew" => Some(ItemCondition::AsNew),
            "excellent" => Some(ItemCondition::Excellent),
            "good" => Some(ItemCondition::Good),
            "with issue" | "with-issue" => Some(ItemCondition::WithIssue),
            "reject" => Some(ItemCondition::Reject),
            _ => None,
        }
    }
}

/// How the piece was acquired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemSource {
    Mine,
    Gift,
    #[serde(rename = "Partial payment")]
    PartialPayment,
    Credit,
}

impl ItemSource {
    pub fn label(&self) -> &'static str {
        match self {
            ItemSource::Mine => "Mine",
            ItemSource::Gift => "Gift",
            ItemSource::PartialPayment => "Partial payment",
            ItemSource::Credit => "Credit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "mine" => Some(ItemSource::Mine),
            "gift" => Some(ItemSource::Gift),
            "partial payment" | "partial-payment" => Some(ItemSource::PartialPayment),
            "credit" => Some(ItemSource::Credit),
            _ => None,
        }
    }
}

/// Two-state sale lifecycle of an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemStatus {
    Available,
    Sold,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::Sold => "Sold",
        }
    }
}
