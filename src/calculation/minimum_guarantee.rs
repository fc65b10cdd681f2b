//! Minimum guarantee handling.
//!
//! Every employee is paid at least the minimum for their role unless the
//! floor has been explicitly switched off for them.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee switches for the minimum guarantee.
///
/// An explicit `false` disables the floor; a missing entry or `true` keeps it.
///
/// # Example
///
/// ```
/// use detailing_payroll::calculation::MinimumOverride;
///
/// let mut overrides = MinimumOverride::new();
/// overrides.set("w1", false);
///
/// assert!(!overrides.respects_minimum("w1"));
/// assert!(overrides.respects_minimum("w2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinimumOverride(HashMap<String, bool>);

impl MinimumOverride {
    /// Creates an override map where every employee keeps the floor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the floor applies to the employee.
    pub fn set(&mut self, employee_id: impl Into<String>, apply_minimum: bool) {
        self.0.insert(employee_id.into(), apply_minimum);
    }

    /// Returns false only when the floor was explicitly disabled.
    pub fn respects_minimum(&self, employee_id: &str) -> bool {
        self.0.get(employee_id) != Some(&false)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for MinimumOverride {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, apply)| (id.into(), apply)).collect())
    }
}

/// The outcome of applying a minimum floor to commission earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumGuaranteeResult {
    /// The payable amount after the floor.
    pub calculated_salary: Decimal,
    /// The floor in effect, zero when disabled.
    pub minimum_guaranteed: Decimal,
    /// True when the floor raised the salary above the earnings.
    pub floor_applied: bool,
}

/// Lifts earnings to the minimum when the floor applies.
///
/// With the floor disabled the earnings are paid exactly, even below the
/// minimum.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::apply_minimum_guarantee;
/// use rust_decimal::Decimal;
///
/// let result = apply_minimum_guarantee(Decimal::new(400, 0), Decimal::new(1000, 0), true);
/// assert_eq!(result.calculated_salary, Decimal::new(1000, 0));
/// assert!(result.floor_applied);
///
/// let result = apply_minimum_guarantee(Decimal::new(400, 0), Decimal::new(1000, 0), false);
/// assert_eq!(result.calculated_salary, Decimal::new(400, 0));
/// assert_eq!(result.minimum_guaranteed, Decimal::ZERO);
/// ```
pub fn apply_minimum_guarantee(
    percentage_earnings: Decimal,
    minimum: Decimal,
    respect_minimum: bool,
) -> MinimumGuaranteeResult {
    if !respect_minimum {
        return MinimumGuaranteeResult {
            calculated_salary: percentage_earnings,
            minimum_guaranteed: Decimal::ZERO,
            floor_applied: false,
        };
    }

    MinimumGuaranteeResult {
        calculated_salary: percentage_earnings.max(minimum),
        minimum_guaranteed: minimum,
        floor_applied: minimum > percentage_earnings,
    }
}
