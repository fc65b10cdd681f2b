//! Daily role resolution.
//!
//! Roles can be recorded per business day. When a day has no explicit entry
//! for an employee, today falls back to the employee's general role while any
//! other date falls back to washer.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::models::{Employee, EmployeeRole, RoleAssignment};

/// Determines an employee's role on a date, using the local clock for today.
///
/// See [`determine_employee_role_on`] for the resolution order.
pub fn determine_employee_role(
    employee_id: &str,
    date: NaiveDate,
    daily_roles_for_date: &HashMap<String, EmployeeRole>,
    employees: &[Employee],
) -> EmployeeRole {
    let today = Local::now().date_naive();
    determine_employee_role_on(employee_id, date, today, daily_roles_for_date, employees)
}

/// Determines an employee's role on a date relative to a given `today`.
///
/// 1. An explicit daily role for the employee wins.
/// 2. On `today`, the employee's general role applies (washer if the
///    employee is unknown or has none).
/// 3. On any other date, the employee is a washer.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::determine_employee_role_on;
/// use detailing_payroll::models::{Employee, EmployeeRole};
/// use chrono::NaiveDate;
/// use std::collections::HashMap;
///
/// let employees = vec![Employee {
///     id: "a1".to_string(),
///     name: "Olga".to_string(),
///     role: Some(EmployeeRole::Admin),
/// }];
/// let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let yesterday = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
/// let no_daily_roles = HashMap::new();
///
/// assert_eq!(
///     determine_employee_role_on("a1", today, today, &no_daily_roles, &employees),
///     EmployeeRole::Admin
/// );
/// assert_eq!(
///     determine_employee_role_on("a1", yesterday, today, &no_daily_roles, &employees),
///     EmployeeRole::Washer
/// );
/// ```
pub fn determine_employee_role_on(
    employee_id: &str,
    date: NaiveDate,
    today: NaiveDate,
    daily_roles_for_date: &HashMap<String, EmployeeRole>,
    employees: &[Employee],
) -> EmployeeRole {
    if let Some(role) = daily_roles_for_date.get(employee_id) {
        return *role;
    }

    if date == today {
        return employees
            .iter()
            .find(|employee| employee.id == employee_id)
            .map(Employee::default_role)
            .unwrap_or_default();
    }

    EmployeeRole::Washer
}

/// Resolves a role for each employee id and collects them into an assignment.
pub fn build_role_assignment<'a>(
    employee_ids: impl IntoIterator<Item = &'a str>,
    date: NaiveDate,
    today: NaiveDate,
    daily_roles_for_date: &HashMap<String, EmployeeRole>,
    employees: &[Employee],
) -> RoleAssignment {
    employee_ids
        .into_iter()
        .map(|id| {
            let role = determine_employee_role_on(id, date, today, daily_roles_for_date, employees);
            (id, role)
        })
        .collect()
}
