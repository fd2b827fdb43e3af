use error_stack::Report;
use rust_decimal::{Decimal, RoundingStrategy};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const GROUPED_FROM: Decimal = Decimal::ONE_THOUSAND;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct Price(Decimal);

impl Price {
    pub fn new(price: impl Into<Decimal>) -> error_stack::Result<Self, KernelError> {
        let price = price.into();
        if price < Decimal::ZERO {
            return Err(Report::new(KernelError::out_of_range("price", price))
                .attach_printable("price must not be negative"));
        }
        Ok(Self(price))
    }

    /// Formats the price with its currency.
    ///
    /// Two decimals, `.` as the separator. From 1000 upward the integer part
    /// is grouped by `,` and the whole text is wrapped in double quotes.
    pub fn display_with(&self, currency: &str) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let plain = format!("{rounded:.2}");
        if self.0 < GROUPED_FROM {
            return format!("{plain} {currency}");
        }
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        format!("\"{}.{fraction} {currency}\"", group_thousands(integer))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use super::{group_thousands, Price};
    use crate::KernelError;

    #[test]
    fn rejects_negative_price() {
        let report = Price::new(dec!(-0.01)).unwrap_err();
        assert_eq!(
            report.current_context(),
            &KernelError::out_of_range("price", "-0.01")
        );
        assert!(Price::new(dec!(0)).is_ok());
    }

    #[test]
    fn formats_small_prices_with_two_decimals() -> error_stack::Result<(), KernelError> {
        assert_eq!(Price::new(dec!(19.9))?.display_with("USD"), "19.90 USD");
        assert_eq!(Price::new(dec!(0))?.display_with("EUR"), "0.00 EUR");
        assert_eq!(Price::new(dec!(12.345))?.display_with("USD"), "12.35 USD");
        assert_eq!(Price::new(dec!(999.99))?.display_with("usd"), "999.99 usd");
        Ok(())
    }

    #[test]
    fn quotes_and_groups_large_prices() -> error_stack::Result<(), KernelError> {
        assert_eq!(
            Price::new(dec!(1234.5))?.display_with("USD"),
            "\"1,234.50 USD\""
        );
        assert_eq!(
            Price::new(dec!(1000))?.display_with("USD"),
            "\"1,000.00 USD\""
        );
        assert_eq!(
            Price::new(dec!(1234567.891))?.display_with("EUR"),
            "\"1,234,567.89 EUR\""
        );
        Ok(())
    }

    #[test]
    fn threshold_applies_before_rounding() -> error_stack::Result<(), KernelError> {
        assert_eq!(Price::new(dec!(999.995))?.display_with("USD"), "1000.00 USD");
        assert_eq!(Price::new(dec!(999.994))?.display_with("USD"), "999.99 USD");
        Ok(())
    }

    #[test]
    fn groups_by_three_from_the_right() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
