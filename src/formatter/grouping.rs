/// Insert grouping separators into a string of integer digits
///
/// `primary` is the size of the rightmost group, `secondary` of every group to its
/// left (3 and 2 for `#,##,##0`). Grouping is skipped entirely when the integer has
/// fewer than `primary + min_grouping` digits, which is how `1234` stays ungrouped in
/// locales such as `es` and `pl`.
pub(super) fn group_integer(
    int_digits: &str,
    primary: Option<u8>,
    secondary: Option<u8>,
    min_grouping: u8,
    separator: char,
) -> String {
    let Some(primary) = primary.filter(|size| *size > 0).map(usize::from) else {
        return int_digits.to_string();
    };
    let secondary = secondary
        .filter(|size| *size > 0)
        .map(usize::from)
        .unwrap_or(primary);

    let digits: Vec<char> = int_digits.chars().collect();
    if digits.len() < primary + usize::from(min_grouping) {
        return int_digits.to_string();
    }

    let mut grouped: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / secondary);
    let mut next_boundary = primary;
    for (i, digit) in digits.iter().rev().enumerate() {
        if i > 0 && i == next_boundary {
            grouped.push(separator);
            next_boundary += secondary;
        }
        grouped.push(*digit);
    }
    grouped.reverse(); // Reverse back to reading order
    grouped.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_western_grouping() {
        assert_eq!(group_integer("1234567", Some(3), Some(3), 1, ','), "1,234,567");
        assert_eq!(group_integer("123", Some(3), Some(3), 1, ','), "123");
        assert_eq!(group_integer("1000", Some(3), None, 1, '.'), "1.000");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_integer("123456789", Some(3), Some(2), 1, ','), "12,34,56,789");
    }

    #[test]
    fn test_min_grouping() {
        assert_eq!(group_integer("1234", Some(3), Some(3), 2, '.'), "1234");
        assert_eq!(group_integer("12345", Some(3), Some(3), 2, '.'), "12.345");
    }

    #[test]
    fn test_no_grouping() {
        assert_eq!(group_integer("1234567", None, None, 1, ','), "1234567");
    }
}
