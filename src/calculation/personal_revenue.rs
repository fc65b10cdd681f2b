//! Personal revenue attribution.
//!
//! A record's price is split equally between everyone who worked on it. The
//! share attributed to one employee is their personal revenue, kept apart by
//! service type because washes and dry-cleans carry different commissions.

use rust_decimal::Decimal;

use crate::models::{ServiceRecord, ServiceType};

/// An employee's equal-split revenue, by service type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonalRevenue {
    /// Share of wash revenue.
    pub wash: Decimal,
    /// Share of dry-clean revenue.
    pub dryclean: Decimal,
}

impl PersonalRevenue {
    /// Wash and dry-clean revenue combined.
    pub fn total(&self) -> Decimal {
        self.wash.saturating_add(self.dryclean)
    }
}

/// Sums an employee's share of every record they participated in.
///
/// Records without participants are skipped, so they never contribute to
/// anyone's personal revenue.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::calculate_personal_revenue;
/// use detailing_payroll::models::{PaymentMethod, PaymentMethodType, ServiceRecord, ServiceType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = |id: &str, price: i64, service_type, staff: &[&str]| ServiceRecord {
///     id: id.to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     time: None,
///     price: Decimal::new(price, 0),
///     service_type,
///     payment_method: PaymentMethod::of(PaymentMethodType::Cash),
///     employee_ids: staff.iter().map(|s| s.to_string()).collect(),
/// };
///
/// let records = vec![
///     record("r1", 4000, None, &["w1", "w2"]),
///     record("r2", 6000, Some(ServiceType::Dryclean), &["w1"]),
/// ];
///
/// let revenue = calculate_personal_revenue("w1", &records);
/// assert_eq!(revenue.wash, Decimal::new(2000, 0));
/// assert_eq!(revenue.dryclean, Decimal::new(6000, 0));
/// assert_eq!(revenue.total(), Decimal::new(8000, 0));
/// ```
pub fn calculate_personal_revenue(employee_id: &str, records: &[ServiceRecord]) -> PersonalRevenue {
    let mut revenue = PersonalRevenue::default();

    for record in records.iter().filter(|r| r.has_participant(employee_id)) {
        let Some(share) = record.share_per_participant() else {
            continue;
        };
        match record.effective_service_type() {
            ServiceType::Wash => revenue.wash = revenue.wash.saturating_add(share),
            ServiceType::Dryclean => revenue.dryclean = revenue.dryclean.saturating_add(share),
        }
    }

    revenue
}
