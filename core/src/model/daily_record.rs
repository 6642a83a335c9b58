use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One day of revenue. `amount == 0.0` means nothing was billed that day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRecord {
    /// Whatever the source uses to name the day; never read by the engines.
    #[serde(alias = "dia", default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Value>,
    // Older exports omit the amount on days without revenue.
    #[serde(alias = "valor", default)]
    pub amount: f64,
}

impl DailyRecord {
    pub fn new(day: u32, amount: f64) -> Self {
        Self { day: Some(Value::from(day)), amount }
    }

    pub fn has_revenue(&self) -> bool {
        self.amount > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_keys() {
        let json = r#"[{"dia": 1, "valor": 22174.1664}, {"dia": 2, "valor": 0.0}, {"dia": 3}]"#;
        let records: Vec<DailyRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], DailyRecord::new(1, 22174.1664));
        assert!(!records[1].has_revenue());
        assert_eq!(records[2].amount, 0.0);
    }

    #[test]
    fn test_day_is_opaque_and_optional() {
        let json = r#"[{"valor": 100.0}, {"dia": "2024-01-02", "valor": 50.0}]"#;
        let records: Vec<DailyRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].day, None);
        assert_eq!(records[0].amount, 100.0);
        assert_eq!(records[1].day, Some(Value::from("2024-01-02")));
        assert_eq!(records[1].amount, 50.0);
    }

    #[test]
    fn test_deserialize_english_keys() {
        let json = r#"{"day": 7, "amount": 10.5}"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, DailyRecord::new(7, 10.5));
    }
}
