//! Period payroll summaries.
//!
//! Minimum guarantees and the admin cash share are per business day, so a
//! reporting period is computed one day at a time and the daily results are
//! then aggregated per employee.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ShopConfig;
use crate::error::EngineResult;
use crate::models::{
    DailyPayroll, Employee, EmployeePeriodTotals, EmployeeRole, PaymentBreakdown, PayrollTotals,
    PeriodSummary, ReportPeriod, ServiceRecord, saturating_sum,
};

use super::minimum_guarantee::MinimumOverride;
use super::role_resolution::build_role_assignment;
use super::salary_calculator::SalaryCalculator;

/// Everything needed to compute payroll over a period.
#[derive(Debug, Clone, Copy)]
pub struct PeriodPayrollInput<'a> {
    /// The period to summarize.
    pub period: ReportPeriod,
    /// Service records; those outside the period are ignored.
    pub records: &'a [ServiceRecord],
    /// Explicit roles recorded per business day.
    pub daily_roles: &'a BTreeMap<NaiveDate, HashMap<String, EmployeeRole>>,
    /// Employees known to the shop.
    pub employees: &'a [Employee],
    /// Minimum guarantee switches per business day.
    pub minimum_overrides: &'a BTreeMap<NaiveDate, MinimumOverride>,
}

/// Computes payroll for every business day in the period that has records,
/// then totals it per employee.
///
/// Each day uses the rate settings in effect on that date. The role universe
/// of a day is its record participants plus anyone with an explicit daily
/// role for it. On `today` it also includes employees whose general role is
/// admin, since that is the day their general role applies.
///
/// # Errors
///
/// Returns `InvalidPeriod` if the period ends before it starts,
/// `InvalidRecord` if an in-period record has an out-of-range price, or
/// `SettingsNotFound` if a business day predates every settings version.
pub fn summarize_period(
    input: &PeriodPayrollInput<'_>,
    config: &ShopConfig,
    today: NaiveDate,
) -> EngineResult<PeriodSummary> {
    input.period.validate()?;

    let mut records_by_date: BTreeMap<NaiveDate, Vec<ServiceRecord>> = BTreeMap::new();
    for record in input
        .records
        .iter()
        .filter(|record| input.period.contains_date(record.date))
    {
        record.validate()?;
        records_by_date
            .entry(record.date)
            .or_default()
            .push(record.clone());
    }

    let no_daily_roles = HashMap::new();
    let mut daily = Vec::with_capacity(records_by_date.len());
    let mut employees: Vec<EmployeePeriodTotals> = Vec::new();
    let mut employee_index: HashMap<String, usize> = HashMap::new();
    let mut payment_breakdown = PaymentBreakdown::default();

    for (date, day_records) in &records_by_date {
        let date = *date;
        let daily_roles_for_date = input.daily_roles.get(&date).unwrap_or(&no_daily_roles);

        let participants = day_records
            .iter()
            .flat_map(|record| record.employee_ids.iter().map(String::as_str));
        let general_admins = input
            .employees
            .iter()
            .filter(|employee| date == today && employee.role == Some(EmployeeRole::Admin))
            .map(|employee| employee.id.as_str());
        let role_ids = daily_roles_for_date
            .keys()
            .map(String::as_str)
            .chain(general_admins)
            .chain(participants);
        let roles = build_role_assignment(
            role_ids,
            date,
            today,
            daily_roles_for_date,
            input.employees,
        );

        let settings = config.settings_for(date)?;
        let mut calculator = SalaryCalculator::new(settings, day_records, &roles, input.employees);
        if let Some(overrides) = input.minimum_overrides.get(&date) {
            calculator = calculator.with_minimum_override(overrides);
        }

        let results = calculator.calculate_salaries();
        let total_revenue = calculator.total_revenue();
        let total_salary = saturating_sum(results.iter().map(|r| r.calculated_salary));

        for record in day_records {
            payment_breakdown.add(record.payment_method.method_type, record.price);
        }

        for result in &results {
            let index = *employee_index
                .entry(result.employee_id.clone())
                .or_insert_with(|| {
                    employees.push(EmployeePeriodTotals {
                        employee_id: result.employee_id.clone(),
                        employee_name: result.employee_name.clone(),
                        days_worked: 0,
                        total_personal_revenue: Decimal::ZERO,
                        total_salary: Decimal::ZERO,
                    });
                    employees.len() - 1
                });
            let totals = &mut employees[index];
            totals.days_worked += 1;
            totals.total_personal_revenue = totals
                .total_personal_revenue
                .saturating_add(result.total_personal_revenue);
            totals.total_salary = totals.total_salary.saturating_add(result.calculated_salary);
        }

        debug!(
            date = %date,
            records = day_records.len(),
            employees = results.len(),
            total_salary = %total_salary,
            "Daily payroll calculated"
        );

        daily.push(DailyPayroll {
            date,
            results,
            total_revenue,
            total_salary,
        });
    }

    employees.sort_by(|a, b| b.total_salary.cmp(&a.total_salary));

    let total_revenue = saturating_sum(daily.iter().map(|day| day.total_revenue));
    let total_salary = saturating_sum(daily.iter().map(|day| day.total_salary));

    Ok(PeriodSummary {
        period: input.period,
        daily,
        employees,
        totals: PayrollTotals {
            total_revenue,
            total_salary,
            payment_breakdown,
        },
    })
}
