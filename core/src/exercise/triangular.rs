use crate::error::KataError;

pub const DEFAULT_INDEX: i64 = 13;

/// Sum of `1..=n`.
pub fn triangular_number(n: i64) -> Result<u128, KataError> {
    if n < 0 {
        return Err(KataError::NegativeNumber(n));
    }
    let n = n as u128;
    Ok(n * (n + 1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index() {
        assert_eq!(triangular_number(DEFAULT_INDEX), Ok(91));
    }

    #[test]
    fn test_matches_running_sum() {
        for n in 0..50i64 {
            let expected: u128 = (1..=n as u128).sum();
            assert_eq!(triangular_number(n), Ok(expected));
        }
    }

    #[test]
    fn test_large_index_does_not_overflow() {
        let n = i64::MAX as u128;
        assert_eq!(triangular_number(i64::MAX), Ok(n * (n + 1) / 2));
    }

    #[test]
    fn test_negative() {
        assert_eq!(triangular_number(-1), Err(KataError::NegativeNumber(-1)));
    }
}
