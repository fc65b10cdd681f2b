//! Service record model and related types.
//!
//! A [`ServiceRecord`] is one serviced car: what was done, what it cost, how it
//! was paid and who worked on it.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

use super::rate_settings::MAX_AMOUNT;

/// The kind of service performed.
///
/// Records written before dry-cleaning was tracked carry no service type;
/// those, and any unrecognized value, are treated as washes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Car wash.
    #[default]
    Wash,
    /// Interior dry-cleaning.
    Dryclean,
}

impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "dryclean" => ServiceType::Dryclean,
            _ => ServiceType::Wash,
        })
    }
}

/// How a customer paid for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    /// Paid in cash.
    Cash,
    /// Paid by card.
    Card,
    /// Billed to a partner organization.
    Organization,
    /// Left unpaid as customer debt.
    Debt,
}

/// Payment method with an optional reference to the billed organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// The payment method type.
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    /// Identifier of the partner organization, for organization billing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// Display name of the partner organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

impl PaymentMethod {
    /// Creates a payment method without an organization reference.
    pub fn of(method_type: PaymentMethodType) -> Self {
        Self {
            method_type,
            organization_id: None,
            organization_name: None,
        }
    }
}

/// A single serviced car.
///
/// # Example
///
/// ```
/// use detailing_payroll::models::{PaymentMethod, PaymentMethodType, ServiceRecord, ServiceType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = ServiceRecord {
///     id: "rec_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     time: None,
///     price: Decimal::new(4000, 0),
///     service_type: None,
///     payment_method: PaymentMethod::of(PaymentMethodType::Cash),
///     employee_ids: vec!["w1".to_string(), "w2".to_string()],
/// };
///
/// assert_eq!(record.effective_service_type(), ServiceType::Wash);
/// assert_eq!(record.share_per_participant(), Some(Decimal::new(2000, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// Business date the service was performed on.
    pub date: NaiveDate,
    /// Time of day the service was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Total price charged for the service.
    pub price: Decimal,
    /// Service type; `None` for legacy wash-only records.
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    /// How the service was paid.
    pub payment_method: PaymentMethod,
    /// Employees who performed the service.
    #[serde(default)]
    pub employee_ids: Vec<String>,
}

impl ServiceRecord {
    /// Returns the service type, treating unset as a wash.
    pub fn effective_service_type(&self) -> ServiceType {
        self.service_type.unwrap_or_default()
    }

    /// Returns true if the employee worked on this record.
    pub fn has_participant(&self, employee_id: &str) -> bool {
        self.employee_ids.iter().any(|id| id == employee_id)
    }

    /// Returns each participant's equal share of the price.
    ///
    /// `None` when the record has no participants.
    pub fn share_per_participant(&self) -> Option<Decimal> {
        if self.employee_ids.is_empty() {
            return None;
        }
        Some(self.price / Decimal::from(self.employee_ids.len()))
    }

    /// Rejects prices whose magnitude exceeds [`MAX_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.price.abs() > MAX_AMOUNT {
            return Err(EngineError::InvalidRecord {
                record_id: self.id.clone(),
                message: format!("price must not exceed {}, got {}", MAX_AMOUNT, self.price),
            });
        }
        Ok(())
    }
}
