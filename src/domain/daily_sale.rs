use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Displayable, Identifiable};

/// A persisted record of which items were sold on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySale {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<Uuid>,
    /// Revenue captured when the sale was recorded. Historical snapshot; not
    /// rewritten when referenced items are later removed.
    pub total_revenue: f64,
    pub created_at: DateTime<Utc>,
}

impl DailySale {
    pub fn new(date: NaiveDate, items: Vec<Uuid>, total_revenue: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            items,
            total_revenue,
            created_at: Utc::now(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Identifiable for DailySale {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for DailySale {
    fn display_label(&self) -> String {
        format!("{} ({} items)", self.date, self.items.len())
    }
}
