/// A value is blank when nothing but literal spaces remain. Tabs and other
/// whitespace count as content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c == ' ')
}

/// Every character is an ASCII digit, or every character is `X`.
pub(crate) fn is_digits_or_all_x(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit()) || value.bytes().all(|b| b == b'X')
}

#[cfg(test)]
mod test {
    use super::{is_blank, is_digits_or_all_x};

    #[test]
    fn blank_strips_only_spaces() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("\t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn digits_or_x_rejects_mixed() {
        assert!(is_digits_or_all_x("0123"));
        assert!(is_digits_or_all_x("XXXX"));
        assert!(!is_digits_or_all_x("012X"));
        assert!(!is_digits_or_all_x("x123"));
        assert!(!is_digits_or_all_x("١٢٣"));
    }
}
