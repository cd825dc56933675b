use itertools::Itertools;

/// Splits `value` into chunks of at most `width` characters.
///
/// The threshold is a character count, not a measured width, so proportional
/// glyphs can still overshoot the value column. An empty value yields one
/// empty line so the row keeps its height.
pub fn wrap_fixed(value: &str, width: usize) -> Vec<String> {
    if width == 0 || value.chars().count() <= width {
        return vec![value.to_string()];
    }
    value
        .chars()
        .chunks(width)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_stay_on_one_line() {
        assert_eq!(wrap_fixed("Patna", 50), vec!["Patna"]);
        assert_eq!(wrap_fixed("", 50), vec![""]);
        let exact = "x".repeat(50);
        assert_eq!(wrap_fixed(&exact, 50).len(), 1);
    }

    #[test]
    fn long_values_split_into_fixed_chunks() {
        let value = "a".repeat(200);
        let lines = wrap_fixed(&value, 50);
        assert_eq!(lines.len(), 200_usize.div_ceil(50));
        assert!(lines.iter().all(|l| l.chars().count() == 50));
        assert_eq!(lines.concat(), value);
    }

    #[test]
    fn last_chunk_carries_the_remainder() {
        let value = "b".repeat(60);
        let lines = wrap_fixed(&value, 50);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 10);
    }

    #[test]
    fn splits_on_chars_not_bytes() {
        let value = "é".repeat(51);
        let lines = wrap_fixed(&value, 50);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 50);
        assert_eq!(lines[1], "é");
    }
}
