//! Core data models for the detailing payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll_report;
mod rate_settings;
mod report_period;
mod salary_result;
mod service_record;

pub use employee::{Employee, EmployeeRole, RoleAssignment};
pub use payroll_report::{
    AuditStep, AuditTrace, AuditWarning, DailyPayroll, EmployeePeriodTotals, PayrollReport,
    PayrollTotals, PeriodSummary,
};
pub(crate) use rate_settings::{percent, saturating_sum};
pub use rate_settings::{MAX_AMOUNT, RateSettings};
pub use report_period::ReportPeriod;
pub use salary_result::{PaymentBreakdown, SalaryBreakdown, SalaryResult};
pub use service_record::{PaymentMethod, PaymentMethodType, ServiceRecord, ServiceType};
