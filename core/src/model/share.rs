use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TOTAL_KEY: &str = "total";
pub const FALLBACK_TOTAL_KEY: &str = "_total";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub percentage: f64,
}

/// Percentage of the total per category, in input order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryShares {
    pub shares: Vec<CategoryShare>,
    pub total: f64,
}

impl CategoryShares {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.percentage)
    }

    pub fn percentage_sum(&self) -> f64 {
        self.shares.iter().map(|s| s.percentage).sum()
    }

    /// Flat `category -> percentage` object with the total appended.
    ///
    /// The total goes under `"total"` unless a category already owns that
    /// key, in which case it goes under `"_total"`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for share in &self.shares {
            map.insert(share.category.clone(), Value::from(share.percentage));
        }
        let key = if map.contains_key(TOTAL_KEY) {
            FALLBACK_TOTAL_KEY
        } else {
            TOTAL_KEY
        };
        map.insert(key.to_string(), Value::from(self.total));
        map
    }
}
