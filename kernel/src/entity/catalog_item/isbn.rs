use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::entity::common::is_digits_or_all_x;
use crate::KernelError;

const ISBN_LENGTH: usize = 10;

/// ISBN-10 of the book. The shape rule is the same as for [`Isni`](super::Isni)
/// and the weighted check sum must be divisible by 11.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let isbn = isbn.into();
        if !Self::is_well_formed(&isbn) {
            return Err(Report::new(KernelError::invalid_argument("isbn", isbn))
                .attach_printable("ISBN-10 must be 10 digits or 10 `X` characters"));
        }
        if !Self::has_valid_checksum(&isbn) {
            return Err(Report::new(KernelError::invalid_argument("isbn", isbn))
                .attach_printable("ISBN-10 check sum is not divisible by 11"));
        }
        Ok(Self(isbn))
    }

    pub fn is_well_formed(isbn: &str) -> bool {
        isbn.len() == ISBN_LENGTH && is_digits_or_all_x(isbn)
    }

    /// Position weights run from the length of the string down to 1.
    /// `X` is worth 10, a digit its numeric value. A string that is not a
    /// well-formed ISBN-10 never has a valid check sum.
    pub fn has_valid_checksum(isbn: &str) -> bool {
        Self::is_well_formed(isbn)
            && weighted_sum(isbn, |c| c.to_digit(10)).is_some_and(|sum| sum % 11 == 0)
    }

    pub fn search_uri(&self) -> String {
        format!("https://isbnsearch.org/isbn/{}", self.0)
    }
}

/// `None` for a character that is neither `X` nor accepted by `digit_value`,
/// or when the sum does not fit in a `u32`.
fn weighted_sum(isbn: &str, digit_value: impl Fn(char) -> Option<u32>) -> Option<u32> {
    let mut weight = u32::try_from(isbn.chars().count()).ok()?;
    let mut sum: u32 = 0;
    for c in isbn.chars() {
        let value = match c {
            'X' => 10,
            c => digit_value(c)?,
        };
        sum = sum.checked_add(value.checked_mul(weight)?)?;
        weight -= 1;
    }
    Some(sum)
}

#[cfg(test)]
mod test {
    use super::{weighted_sum, Isbn};
    use crate::KernelError;

    #[test]
    fn accepts_valid_isbn10() -> error_stack::Result<(), KernelError> {
        let isbn = Isbn::new("0306406152")?;
        assert_eq!(isbn.as_ref(), "0306406152");
        Isbn::new("0471958697")?;
        Isbn::new("XXXXXXXXXX")?;
        Ok(())
    }

    #[test]
    fn rejects_bad_checksum() {
        let report = Isbn::new("0306406153").unwrap_err();
        assert_eq!(
            report.current_context(),
            &KernelError::invalid_argument("isbn", "0306406153")
        );
    }

    #[test]
    fn rejects_bad_shape() {
        for isbn in ["030640615", "03064061521", "030640615X", "03064O6152"] {
            assert!(!Isbn::is_well_formed(isbn), "{isbn}");
            assert!(Isbn::new(isbn).is_err(), "{isbn}");
        }
    }

    // Weighting raw code points instead of digit values adds
    // 48 * (10 + 9 + ... + 1) = 2640 = 11 * 240 to the sum, so both
    // readings of the check sum accept the same well-formed strings.
    // The digit-value reading is the one implemented.
    #[test]
    fn digit_value_and_code_point_checksums_agree() {
        for isbn in [
            "0306406152",
            "0306406153",
            "0471958697",
            "1234567890",
            "9999999999",
            "0000000000",
        ] {
            let by_digit = weighted_sum(isbn, |c| c.to_digit(10)).expect("digits only");
            let by_code_point = weighted_sum(isbn, |c| Some(c as u32)).expect("fits in u32");
            assert_eq!(by_code_point - by_digit, 2640);
            assert_eq!(by_digit % 11 == 0, by_code_point % 11 == 0, "{isbn}");
        }
    }

    #[test]
    fn checksum_rejects_malformed_input() {
        assert!(!Isbn::has_valid_checksum("ABCDEFGHIJ"));
        assert!(!Isbn::has_valid_checksum("aaaaaaaaaa"));
        assert!(!Isbn::has_valid_checksum(""));
        assert!(!Isbn::has_valid_checksum(&"9".repeat(100_000)));
        assert!(Isbn::has_valid_checksum("0306406152"));
        assert!(Isbn::has_valid_checksum("XXXXXXXXXX"));
    }

    #[test]
    fn weighted_sum_stops_at_unknown_characters_and_overflow() {
        assert_eq!(weighted_sum("ABCDEFGHIJ", |c| c.to_digit(10)), None);
        assert_eq!(weighted_sum(&"9".repeat(100_000), |c| c.to_digit(10)), None);
        assert_eq!(weighted_sum("0306406152", |c| c.to_digit(10)), Some(132));
    }

    #[test]
    fn builds_isbnsearch_uri() -> error_stack::Result<(), KernelError> {
        let isbn = Isbn::new("0306406152")?;
        assert_eq!(isbn.search_uri(), "https://isbnsearch.org/isbn/0306406152");
        Ok(())
    }
}
