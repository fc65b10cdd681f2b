//! Rate settings model.
//!
//! [`RateSettings`] holds the commission percentages and minimum guarantees
//! applied by the salary calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Commission rates and minimum guarantees for one computation.
///
/// Percentages are expressed as whole percents (`40` means 40%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSettings {
    /// Minimum a washer is paid when commission falls short.
    pub minimum_payment_washer: Decimal,
    /// Minimum an admin is paid when earnings fall short.
    pub minimum_payment_admin: Decimal,
    /// Washer commission on personally attributed wash revenue.
    pub percentage_washer: Decimal,
    /// Washer commission on personally attributed dry-clean revenue.
    pub percentage_washer_dryclean: Decimal,
    /// Admin share of total revenue, split between all admins.
    pub admin_cash_percentage: Decimal,
    /// Admin commission on their own wash revenue.
    pub admin_car_wash_percentage: Decimal,
    /// Admin commission on their own dry-clean revenue.
    pub admin_dryclean_percentage: Decimal,
}

impl RateSettings {
    /// Checks that minimums lie in 0..=[`MAX_AMOUNT`] and percentages in 0..=100.
    ///
    /// # Example
    ///
    /// ```
    /// use detailing_payroll::models::RateSettings;
    /// use rust_decimal::Decimal;
    ///
    /// let settings = RateSettings {
    ///     minimum_payment_washer: Decimal::new(1000, 0),
    ///     minimum_payment_admin: Decimal::new(1500, 0),
    ///     percentage_washer: Decimal::new(140, 0),
    ///     percentage_washer_dryclean: Decimal::new(50, 0),
    ///     admin_cash_percentage: Decimal::new(5, 0),
    ///     admin_car_wash_percentage: Decimal::new(10, 0),
    ///     admin_dryclean_percentage: Decimal::new(10, 0),
    /// };
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let minimums = [
            ("minimum_payment_washer", self.minimum_payment_washer),
            ("minimum_payment_admin", self.minimum_payment_admin),
        ];
        for (field, value) in minimums {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidSettings {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
            if value > MAX_AMOUNT {
                return Err(EngineError::InvalidSettings {
                    field: field.to_string(),
                    message: format!("must not exceed {}, got {}", MAX_AMOUNT, value),
                });
            }
        }

        let percentages = [
            ("percentage_washer", self.percentage_washer),
            ("percentage_washer_dryclean", self.percentage_washer_dryclean),
            ("admin_cash_percentage", self.admin_cash_percentage),
            ("admin_car_wash_percentage", self.admin_car_wash_percentage),
            ("admin_dryclean_percentage", self.admin_dryclean_percentage),
        ];
        for (field, value) in percentages {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(EngineError::InvalidSettings {
                    field: field.to_string(),
                    message: format!("must be between 0 and 100, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// Largest magnitude accepted for a price or a minimum payment (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Converts a whole percent into a multiplier (`40` becomes `0.40`).
pub(crate) fn percent(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

/// Sums amounts, clamping at the decimal bounds rather than overflowing.
pub(crate) fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_settings() -> RateSettings {
        RateSettings {
            minimum_payment_washer: dec("1000"),
            minimum_payment_admin: dec("1500"),
            percentage_washer: dec("40"),
            percentage_washer_dryclean: dec("50"),
            admin_cash_percentage: dec("5"),
            admin_car_wash_percentage: dec("10"),
            admin_dryclean_percentage: dec("10"),
        }
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_boundary_percentages_are_valid() {
        let mut settings = valid_settings();
        settings.percentage_washer = dec("0");
        settings.percentage_washer_dryclean = dec("100");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_negative_minimum_is_rejected() {
        let mut settings = valid_settings();
        settings.minimum_payment_admin = dec("-1");

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, .. }) => {
                assert_eq!(field, "minimum_payment_admin");
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_minimum_above_max_amount_is_rejected() {
        let mut settings = valid_settings();
        settings.minimum_payment_washer = MAX_AMOUNT;
        assert!(settings.validate().is_ok());

        settings.minimum_payment_washer = Decimal::MAX;
        match settings.validate() {
            Err(EngineError::InvalidSettings { field, message }) => {
                assert_eq!(field, "minimum_payment_washer");
                assert!(message.contains("must not exceed"));
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_saturating_sum_clamps_instead_of_overflowing() {
        assert_eq!(saturating_sum([dec("1.5"), dec("2.5")]), dec("4"));
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
    }

    #[test]
    fn test_max_amount_is_ten_to_the_fifteenth() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));
    }

    #[test]
    fn test_percentage_above_hundred_is_rejected() {
        let mut settings = valid_settings();
        settings.admin_cash_percentage = dec("100.5");

        match settings.validate() {
            Err(EngineError::InvalidSettings { field, message }) => {
                assert_eq!(field, "admin_cash_percentage");
                assert!(message.contains("100.5"));
            }
            other => panic!("Expected InvalidSettings, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_from_numbers_and_strings() {
        let json = r#"{
            "minimum_payment_washer": 1000,
            "minimum_payment_admin": "1500",
            "percentage_washer": 40,
            "percentage_washer_dryclean": "50",
            "admin_cash_percentage": 5,
            "admin_car_wash_percentage": 10,
            "admin_dryclean_percentage": 10
        }"#;

        let settings: RateSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings, valid_settings());
    }

    #[test]
    fn test_percent_converts_to_multiplier() {
        assert_eq!(percent(dec("40")), dec("0.4"));
        assert_eq!(percent(dec("5")) * dec("40000"), dec("2000"));
    }
}
