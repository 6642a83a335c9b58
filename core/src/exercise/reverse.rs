use crate::error::KataError;

/// Reverses `input` character by character, swapping from both ends.
pub fn reverse_text(input: &str) -> Result<String, KataError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(KataError::EmptyText);
    }

    let mut chars: Vec<char> = trimmed.chars().collect();
    let (mut start, mut end) = (0, chars.len() - 1);
    while start < end {
        chars.swap(start, end);
        start += 1;
        end -= 1;
    }

    Ok(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_text("Target Sistemas"), Ok("sametsiS tegraT".to_string()));
        assert_eq!(reverse_text("a"), Ok("a".to_string()));
        assert_eq!(reverse_text("ab"), Ok("ba".to_string()));
    }

    #[test]
    fn test_trims_and_keeps_multibyte_chars() {
        assert_eq!(reverse_text("  ação "), Ok("oãça".to_string()));
    }

    #[test]
    fn test_blank() {
        assert_eq!(reverse_text(""), Err(KataError::EmptyText));
        assert_eq!(reverse_text("   "), Err(KataError::EmptyText));
    }
}
