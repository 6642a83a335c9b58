use crate::error::KataError;

#[derive(Debug, Clone, PartialEq)]
pub struct FibonacciCheck {
    pub target: u64,
    pub is_member: bool,
    /// Terms from 0 up to the first one that reaches `target`.
    pub sequence: Vec<u64>,
}

impl FibonacciCheck {
    /// 0-based index of `target` in the sequence, if it belongs to it.
    pub fn position(&self) -> Option<usize> {
        if self.is_member {
            Some(self.sequence.len() - 1)
        } else {
            None
        }
    }

    /// The two consecutive terms `target` falls between.
    pub fn bracket(&self) -> Option<(u64, u64)> {
        if self.is_member || self.sequence.len() < 2 {
            return None;
        }
        let n = self.sequence.len();
        Some((self.sequence[n - 2], self.sequence[n - 1]))
    }
}

pub fn check_fibonacci(target: i64) -> Result<FibonacciCheck, KataError> {
    if target < 0 {
        return Err(KataError::NegativeNumber(target));
    }
    let target = target as u64;

    if target == 0 {
        return Ok(FibonacciCheck { target, is_member: true, sequence: vec![0] });
    }

    // F(93) is the first term past i64::MAX and still fits in u64,
    // so the loop stops before any overflow.
    let mut sequence: Vec<u64> = vec![0, 1];
    loop {
        let n = sequence.len();
        let last = sequence[n - 1];
        if last >= target {
            break;
        }
        sequence.push(sequence[n - 2] + last);
    }

    let is_member = sequence.last() == Some(&target);
    Ok(FibonacciCheck { target, is_member, sequence })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        let zero = check_fibonacci(0).unwrap();
        assert!(zero.is_member);
        assert_eq!(zero.sequence, vec![0]);
        assert_eq!(zero.position(), Some(0));

        let one = check_fibonacci(1).unwrap();
        assert!(one.is_member);
        assert_eq!(one.sequence, vec![0, 1]);
        assert_eq!(one.position(), Some(1));
    }

    #[test]
    fn test_member() {
        let check = check_fibonacci(21).unwrap();
        assert!(check.is_member);
        assert_eq!(check.position(), Some(8));
        assert_eq!(check.sequence, vec![0, 1, 1, 2, 3, 5, 8, 13, 21]);
        assert_eq!(check.bracket(), None);
    }

    #[test]
    fn test_non_member() {
        let check = check_fibonacci(22).unwrap();
        assert!(!check.is_member);
        assert_eq!(check.position(), None);
        assert_eq!(check.bracket(), Some((21, 34)));
    }

    #[test]
    fn test_negative() {
        assert_eq!(check_fibonacci(-3), Err(KataError::NegativeNumber(-3)));
    }

    #[test]
    fn test_largest_input() {
        let check = check_fibonacci(i64::MAX).unwrap();
        assert!(!check.is_member);
        assert_eq!(check.sequence.len(), 94);
        assert_eq!(check.bracket(), Some((7540113804746346429, 12200160415121876738)));
    }
}
