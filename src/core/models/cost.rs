use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accumulated cost for one `(region, service)` group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCostItem {
    pub region: String,
    pub service: String,
    pub cost_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCost {
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Cost Explorer flags figures for the current, unfinished period.
    pub estimated: bool,
}

/// Aggregate of a Cost Explorer result set.
///
/// `total_cost_amount` always equals the sum of `details` amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCost {
    pub metric: String,
    pub total_cost_amount: Decimal,
    /// Currency reported alongside the amounts, e.g. `USD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub details: Vec<CloudCostItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<CostPeriod>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub daily: Vec<DailyCost>,
}

impl CloudCost {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}
