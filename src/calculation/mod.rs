//! Calculation logic for the payroll engine.
//!
//! This module contains personal revenue attribution, the minimum guarantee,
//! washer and admin salary rules, daily role resolution, the
//! [`SalaryCalculator`] that combines them for one business day, and the
//! period summary that aggregates days.

mod admin_salary;
mod minimum_guarantee;
mod period_summary;
mod personal_revenue;
mod role_resolution;
mod salary_calculator;
mod washer_salary;

pub use admin_salary::{AdminSalaryResult, admin_cash_bonus, calculate_admin_salary};
pub use minimum_guarantee::{MinimumGuaranteeResult, MinimumOverride, apply_minimum_guarantee};
pub use period_summary::{PeriodPayrollInput, summarize_period};
pub use personal_revenue::{PersonalRevenue, calculate_personal_revenue};
pub use role_resolution::{
    build_role_assignment, determine_employee_role, determine_employee_role_on,
};
pub use salary_calculator::{
    SalaryCalculator, UNATTRIBUTED_RECORD_WARNING, UNNAMED_EMPLOYEE_WARNING,
};
pub use washer_salary::{WasherSalaryResult, calculate_washer_salary};
