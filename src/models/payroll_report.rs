//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] returned for a single business
//! day, the [`PeriodSummary`] aggregated over a reporting period, and the
//! audit trace types recording how each salary was reached.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PaymentBreakdown, ReportPeriod, SalaryResult};

/// A single step in the audit trace recording a salary decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the rule was applied to.
    pub employee_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was computed through but deserves attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Aggregated totals for one computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of all record prices.
    pub total_revenue: Decimal,
    /// Sum of all calculated salaries.
    pub total_salary: Decimal,
    /// Revenue grouped by payment method.
    pub payment_breakdown: PaymentBreakdown,
}

/// The complete result of a payroll computation for one business day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The business date the records belong to.
    pub date: NaiveDate,
    /// Per-employee results, highest salary first.
    pub results: Vec<SalaryResult>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
    /// Complete audit trace of salary decisions.
    pub audit_trace: AuditTrace,
}

/// Payroll for one business day inside a period summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPayroll {
    /// The business date.
    pub date: NaiveDate,
    /// Per-employee results for the day, highest salary first.
    pub results: Vec<SalaryResult>,
    /// Sum of the day's record prices.
    pub total_revenue: Decimal,
    /// Sum of the day's calculated salaries.
    pub total_salary: Decimal,
}

/// One employee's totals across a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePeriodTotals {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Number of business days the employee was paid for.
    pub days_worked: u32,
    /// Personal revenue summed over the period.
    pub total_personal_revenue: Decimal,
    /// Salary summed over the period.
    pub total_salary: Decimal,
}

/// Payroll aggregated over a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The period covered.
    pub period: ReportPeriod,
    /// One entry per business day with records, in date order.
    pub daily: Vec<DailyPayroll>,
    /// Per-employee totals, highest total salary first.
    pub employees: Vec<EmployeePeriodTotals>,
    /// Aggregated totals over the period.
    pub totals: PayrollTotals,
}
