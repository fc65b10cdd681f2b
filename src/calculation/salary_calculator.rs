//! The salary calculator.
//!
//! [`SalaryCalculator`] borrows a snapshot of settings, records, roles and
//! employees and turns it into one [`SalaryResult`] per payable employee. It
//! never mutates its inputs, so the same instance can be queried repeatedly.

use std::collections::HashSet;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, EmployeeRole, PaymentBreakdown, PayrollReport,
    PayrollTotals, RateSettings, RoleAssignment, SalaryResult, ServiceRecord, saturating_sum,
};

use super::admin_salary::calculate_admin_salary;
use super::minimum_guarantee::MinimumOverride;
use super::personal_revenue::calculate_personal_revenue;
use super::washer_salary::calculate_washer_salary;

/// Warning code for an employee id that has no name on file.
pub const UNNAMED_EMPLOYEE_WARNING: &str = "UNNAMED_EMPLOYEE";

/// Warning code for a record nobody is attributed to.
pub const UNATTRIBUTED_RECORD_WARNING: &str = "UNATTRIBUTED_RECORD";

/// Computes payroll for one set of service records.
///
/// # Example
///
/// ```
/// use detailing_payroll::calculation::SalaryCalculator;
/// use detailing_payroll::models::{
///     Employee, PaymentMethod, PaymentMethodType, RateSettings, RoleAssignment, ServiceRecord,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = RateSettings {
///     minimum_payment_washer: Decimal::new(1000, 0),
///     minimum_payment_admin: Decimal::new(1500, 0),
///     percentage_washer: Decimal::new(40, 0),
///     percentage_washer_dryclean: Decimal::new(50, 0),
///     admin_cash_percentage: Decimal::new(5, 0),
///     admin_car_wash_percentage: Decimal::new(10, 0),
///     admin_dryclean_percentage: Decimal::new(10, 0),
/// };
/// let records = vec![ServiceRecord {
///     id: "r1".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     time: None,
///     price: Decimal::new(3000, 0),
///     service_type: None,
///     payment_method: PaymentMethod::of(PaymentMethodType::Cash),
///     employee_ids: vec!["w1".to_string()],
/// }];
/// let employees = vec![Employee { id: "w1".to_string(), name: "Ivan".to_string(), role: None }];
/// let roles = RoleAssignment::new();
///
/// let calculator = SalaryCalculator::new(&settings, &records, &roles, &employees);
/// let results = calculator.calculate_salaries();
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].calculated_salary, Decimal::new(1200, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SalaryCalculator<'a> {
    settings: &'a RateSettings,
    records: &'a [ServiceRecord],
    roles: &'a RoleAssignment,
    employees: &'a [Employee],
    minimum_override: Option<&'a MinimumOverride>,
}

/// Everything one pass over the inputs produces.
struct Computation {
    results: Vec<SalaryResult>,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl<'a> SalaryCalculator<'a> {
    /// Creates a calculator over the given snapshot. Every employee keeps the
    /// minimum guarantee until [`with_minimum_override`](Self::with_minimum_override)
    /// says otherwise.
    pub fn new(
        settings: &'a RateSettings,
        records: &'a [ServiceRecord],
        roles: &'a RoleAssignment,
        employees: &'a [Employee],
    ) -> Self {
        Self {
            settings,
            records,
            roles,
            employees,
            minimum_override: None,
        }
    }

    /// Applies per-employee minimum guarantee switches.
    pub fn with_minimum_override(mut self, minimum_override: &'a MinimumOverride) -> Self {
        self.minimum_override = Some(minimum_override);
        self
    }

    /// Calculates every payable employee's salary, highest first.
    ///
    /// Employees are drawn from the role map and from record participants;
    /// ids without a name in the employee list are left out. Equal salaries
    /// keep their discovery order.
    pub fn calculate_salaries(&self) -> Vec<SalaryResult> {
        self.compute().results
    }

    /// Sum of all calculated salaries.
    pub fn total_salary_sum(&self) -> Decimal {
        saturating_sum(
            self.calculate_salaries()
                .iter()
                .map(|result| result.calculated_salary),
        )
    }

    /// Sum of all record prices, unsplit.
    pub fn total_revenue(&self) -> Decimal {
        saturating_sum(self.records.iter().map(|record| record.price))
    }

    /// Record prices grouped by payment method.
    pub fn payment_breakdown(&self) -> PaymentBreakdown {
        PaymentBreakdown::from_records(self.records)
    }

    /// Calculates salaries and wraps them in a report with totals and the
    /// audit trace.
    pub fn calculate_report(&self, date: NaiveDate) -> PayrollReport {
        let start_time = Instant::now();
        let computation = self.compute();

        let total_salary = saturating_sum(
            computation
                .results
                .iter()
                .map(|result| result.calculated_salary),
        );

        PayrollReport {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            date,
            results: computation.results,
            totals: PayrollTotals {
                total_revenue: self.total_revenue(),
                total_salary,
                payment_breakdown: self.payment_breakdown(),
            },
            audit_trace: AuditTrace {
                steps: computation.steps,
                warnings: computation.warnings,
                duration_us: u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
            },
        }
    }

    fn compute(&self) -> Computation {
        let total_revenue = self.total_revenue();
        let admin_count = self.roles.admin_count();

        let mut results = Vec::new();
        let mut steps = Vec::new();
        let mut warnings: Vec<AuditWarning> = self
            .records
            .iter()
            .filter(|record| record.employee_ids.is_empty())
            .map(|record| AuditWarning {
                code: UNATTRIBUTED_RECORD_WARNING.to_string(),
                message: format!(
                    "Record '{}' has no participants; its price counts toward total revenue only",
                    record.id
                ),
                severity: "medium".to_string(),
            })
            .collect();

        let mut step_number: u32 = 1;
        for employee_id in self.employee_universe() {
            let Some(employee) = self.find_employee(employee_id) else {
                warnings.push(AuditWarning {
                    code: UNNAMED_EMPLOYEE_WARNING.to_string(),
                    message: format!(
                        "Employee '{}' is not in the employee list and was left out",
                        employee_id
                    ),
                    severity: "low".to_string(),
                });
                continue;
            };

            let revenue = calculate_personal_revenue(employee_id, self.records);
            let respect_minimum = self
                .minimum_override
                .is_none_or(|overrides| overrides.respects_minimum(employee_id));

            let (salary, audit_step) = match self.roles.role_of(employee_id) {
                EmployeeRole::Washer => {
                    let result = calculate_washer_salary(
                        employee,
                        &revenue,
                        self.settings,
                        respect_minimum,
                        step_number,
                    );
                    (result.salary, result.audit_step)
                }
                EmployeeRole::Admin => {
                    let result = calculate_admin_salary(
                        employee,
                        &revenue,
                        total_revenue,
                        admin_count,
                        self.settings,
                        respect_minimum,
                        step_number,
                    );
                    (result.salary, result.audit_step)
                }
            };

            debug!(
                employee_id = %salary.employee_id,
                role = salary.role.as_str(),
                personal_revenue = %salary.total_personal_revenue,
                calculated_salary = %salary.calculated_salary,
                "Salary calculated"
            );

            results.push(salary);
            steps.push(audit_step);
            step_number += 1;
        }

        // Vec::sort_by is stable, so ties keep discovery order.
        results.sort_by(|a, b| b.calculated_salary.cmp(&a.calculated_salary));

        Computation {
            results,
            steps,
            warnings,
        }
    }

    /// Role-map ids in ascending order, then record participants in order of
    /// first appearance.
    fn employee_universe(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let record_participants = self
            .records
            .iter()
            .flat_map(|record| record.employee_ids.iter().map(String::as_str));

        self.roles
            .employee_ids()
            .chain(record_participants)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    fn find_employee(&self, employee_id: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|employee| employee.id == employee_id)
    }
}
