use crate::error::KataError;
use crate::model::share::{CategoryShare, CategoryShares};

/// Each category's share of the summed amount, as a percentage in `0..=100`.
///
/// Categories keep the order they were given in.
pub fn compute_shares<I, K>(amounts: I) -> Result<CategoryShares, KataError>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    let amounts: Vec<(String, f64)> = amounts
        .into_iter()
        .map(|(k, v)| (k.into(), v))
        .collect();

    if amounts.is_empty() {
        return Err(KataError::EmptyInput);
    }

    let total: f64 = amounts.iter().map(|(_, v)| v).sum();
    if total == 0.0 {
        return Err(KataError::ZeroTotal);
    }

    tracing::debug!(categories = amounts.len(), total, "computing revenue shares");

    let shares = amounts
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            percentage: (amount / total) * 100.0,
        })
        .collect();

    Ok(CategoryShares { shares, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_states() {
        let result = compute_shares([("SP", 60.0), ("RJ", 40.0)]).unwrap();

        assert_eq!(result.total, 100.0);
        assert_eq!(result.get("SP"), Some(60.0));
        assert_eq!(result.get("RJ"), Some(40.0));
        assert_eq!(result.percentage_sum(), 100.0);
    }

    #[test]
    fn test_two_states_as_flat_map() {
        let map = compute_shares([("SP", 60.0), ("RJ", 40.0)]).unwrap().to_map();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["SP", "RJ", "total"]);
        assert_eq!(
            serde_json::Value::Object(map),
            serde_json::json!({"SP": 60.0, "RJ": 40.0, "total": 100.0})
        );
    }

    #[test]
    fn test_preserves_input_order() {
        let result = compute_shares(vec![
            ("MG".to_string(), 1.0),
            ("AC".to_string(), 2.0),
            ("ZZ".to_string(), 3.0),
        ])
        .unwrap();

        let order: Vec<&str> = result.shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["MG", "AC", "ZZ"]);
    }

    #[test]
    fn test_sample_states_sum_to_hundred() {
        let result = compute_shares([
            ("SP", 67836.43),
            ("RJ", 36678.66),
            ("MG", 29229.88),
            ("ES", 27165.48),
            ("Outros", 19849.53),
        ])
        .unwrap();

        assert!((result.total - 180759.98).abs() < 1e-6);
        assert!((result.percentage_sum() - 100.0).abs() < 1e-9);
        let sp = result.get("SP").unwrap();
        assert!((sp - 37.528).abs() < 1e-3, "SP share was {}", sp);
    }

    #[test]
    fn test_zero_category_is_kept() {
        let result = compute_shares([("A", 0.0), ("B", 5.0)]).unwrap();
        assert_eq!(result.get("A"), Some(0.0));
        assert_eq!(result.get("B"), Some(100.0));
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<(String, f64)> = Vec::new();
        assert_eq!(compute_shares(empty), Err(KataError::EmptyInput));
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(compute_shares([("A", 0.0), ("B", 0.0)]), Err(KataError::ZeroTotal));
    }

    #[test]
    fn test_idempotent() {
        let input = [("SP", 67836.43), ("RJ", 36678.66)];
        let first = compute_shares(input).unwrap();
        let second = compute_shares(input).unwrap();
        for (a, b) in first.shares.iter().zip(second.shares.iter()) {
            assert_eq!(a.percentage.to_bits(), b.percentage.to_bits());
        }
        assert_eq!(first.total.to_bits(), second.total.to_bits());
    }
}
