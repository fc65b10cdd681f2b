//! Request types for the payroll API.
//!
//! This module defines the JSON request bodies for the `/salaries` and
//! `/reports/period` endpoints.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{MinimumOverride, PeriodPayrollInput};
use crate::models::{Employee, EmployeeRole, RateSettings, ReportPeriod, RoleAssignment, ServiceRecord};

/// Request body for the `/salaries` endpoint.
///
/// Calculates one business day's payroll. When `settings` is omitted the
/// version in effect on `date` is taken from the loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The business day being paid.
    pub date: NaiveDate,
    /// Rate settings overriding the configured ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RateSettings>,
    /// The day's service records.
    pub records: Vec<ServiceRecord>,
    /// Role of each employee on the day; empty when omitted.
    #[serde(default)]
    pub roles: RoleAssignment,
    /// Employees known to the shop.
    pub employees: Vec<Employee>,
    /// Minimum guarantee switches by employee id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_override: Option<MinimumOverride>,
}

/// Request body for the `/reports/period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The period to summarize.
    pub period: ReportPeriod,
    /// Service records; those outside the period are ignored.
    pub records: Vec<ServiceRecord>,
    /// Explicit roles keyed by business day, then employee id.
    #[serde(default)]
    pub daily_roles: BTreeMap<NaiveDate, HashMap<String, EmployeeRole>>,
    /// Employees known to the shop.
    pub employees: Vec<Employee>,
    /// Minimum guarantee switches keyed by business day.
    #[serde(default)]
    pub minimum_overrides: BTreeMap<NaiveDate, MinimumOverride>,
    /// The reference "today" for role resolution; the server's local date
    /// when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl PeriodRequest {
    /// Borrows the request as period payroll input.
    pub fn input(&self) -> PeriodPayrollInput<'_> {
        PeriodPayrollInput {
            period: self.period,
            records: &self.records,
            daily_roles: &self.daily_roles,
            employees: &self.employees,
            minimum_overrides: &self.minimum_overrides,
        }
    }
}
