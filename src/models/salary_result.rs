//! Salary result models.
//!
//! This module contains the [`SalaryResult`] produced for every employee by
//! the salary calculator, together with its [`SalaryBreakdown`] and the
//! revenue [`PaymentBreakdown`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeRole, PaymentMethodType, ServiceRecord};

/// Itemized components of a calculated salary.
///
/// Washers carry `washer_percentage`; admins carry `admin_cash_bonus` and
/// `admin_car_wash_bonus`. Fields that do not apply to the role are omitted
/// from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Washer commission earned on wash and dry-clean revenue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub washer_percentage: Option<Decimal>,
    /// Admin share of total revenue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_cash_bonus: Option<Decimal>,
    /// Admin commission on own wash and dry-clean revenue combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_car_wash_bonus: Option<Decimal>,
    /// The minimum floor that applied (zero when disabled for the employee).
    pub minimum_guaranteed: Decimal,
    /// The payable amount, equal to the calculated salary.
    pub final_amount: Decimal,
}

/// Payroll outcome for one employee.
///
/// # Example
///
/// ```
/// use detailing_payroll::models::{EmployeeRole, SalaryBreakdown, SalaryResult};
/// use rust_decimal::Decimal;
///
/// let result = SalaryResult {
///     employee_id: "w1".to_string(),
///     employee_name: "Ivan".to_string(),
///     role: EmployeeRole::Washer,
///     total_personal_revenue: Decimal::new(3000, 0),
///     calculated_salary: Decimal::new(1200, 0),
///     breakdown: SalaryBreakdown {
///         washer_percentage: Some(Decimal::new(1200, 0)),
///         admin_cash_bonus: None,
///         admin_car_wash_bonus: None,
///         minimum_guaranteed: Decimal::new(1000, 0),
///         final_amount: Decimal::new(1200, 0),
///     },
/// };
/// assert_eq!(result.breakdown.final_amount, result.calculated_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The role the salary was computed under.
    pub role: EmployeeRole,
    /// The employee's equal-split share of every record they worked on.
    pub total_personal_revenue: Decimal,
    /// The final payable amount.
    pub calculated_salary: Decimal,
    /// Itemized salary components.
    pub breakdown: SalaryBreakdown,
}

/// Revenue totals grouped by payment method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Revenue paid in cash.
    pub cash: Decimal,
    /// Revenue paid by card.
    pub card: Decimal,
    /// Revenue billed to partner organizations.
    pub organization: Decimal,
    /// Revenue left as customer debt.
    pub debt: Decimal,
    /// Sum of all payment methods.
    pub total: Decimal,
}

impl PaymentBreakdown {
    /// Builds the breakdown for a set of records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ServiceRecord>) -> Self {
        let mut breakdown = Self::default();
        for record in records {
            breakdown.add(record.payment_method.method_type, record.price);
        }
        breakdown
    }

    /// Adds an amount under the given payment method.
    pub fn add(&mut self, method: PaymentMethodType, amount: Decimal) {
        let bucket = match method {
            PaymentMethodType::Cash => &mut self.cash,
            PaymentMethodType::Card => &mut self.card,
            PaymentMethodType::Organization => &mut self.organization,
            PaymentMethodType::Debt => &mut self.debt,
        };
        *bucket = bucket.saturating_add(amount);
        self.total = self.total.saturating_add(amount);
    }
}
