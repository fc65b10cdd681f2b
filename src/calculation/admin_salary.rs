//! Admin salary calculation.
//!
//! Admins take an equal share of a percentage of the whole period's revenue,
//! plus commission on any cars they serviced themselves, lifted to the admin
//! minimum when it applies.

use rust_decimal::Decimal;

use crate::models::{
    AuditStep, Employee, EmployeeRole, RateSettings, SalaryBreakdown, SalaryResult, percent,
};

use super::minimum_guarantee::apply_minimum_guarantee;
use super::personal_revenue::PersonalRevenue;

/// The result of an admin salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AdminSalaryResult {
    /// The admin's payroll outcome.
    pub salary: SalaryResult,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns one admin's share of the revenue bonus.
///
/// The bonus is divided by `admin_count`; with no admins counted the full
/// bonus is returned undivided.
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::admin_cash_bonus;
/// use rust_decimal::Decimal;
///
/// let revenue = Decimal::new(40000, 0);
/// let rate = Decimal::new(5, 0);
/// assert_eq!(admin_cash_bonus(revenue, rate, 1), Decimal::new(2000, 0));
/// assert_eq!(admin_cash_bonus(revenue, rate, 2), Decimal::new(1000, 0));
/// assert_eq!(admin_cash_bonus(revenue, rate, 0), Decimal::new(2000, 0));
/// ```
pub fn admin_cash_bonus(
    total_revenue: Decimal,
    admin_cash_percentage: Decimal,
    admin_count: usize,
) -> Decimal {
    let bonus = total_revenue.saturating_mul(percent(admin_cash_percentage));
    if admin_count > 0 {
        bonus / Decimal::from(admin_count)
    } else {
        bonus
    }
}

/// Calculates an admin's salary.
///
/// # Arguments
///
/// * `employee` - The admin being paid
/// * `revenue` - The admin's own wash and dry-clean revenue
/// * `total_revenue` - Sum of all record prices in the computation
/// * `admin_count` - Number of admins sharing the revenue bonus
/// * `settings` - Commission rates and minimums in effect
/// * `respect_minimum` - Whether the admin minimum applies
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_admin_salary(
    employee: &Employee,
    revenue: &PersonalRevenue,
    total_revenue: Decimal,
    admin_count: usize,
    settings: &RateSettings,
    respect_minimum: bool,
    step_number: u32,
) -> AdminSalaryResult {
    let cash_bonus = admin_cash_bonus(total_revenue, settings.admin_cash_percentage, admin_count);
    let wash_bonus = revenue
        .wash
        .saturating_mul(percent(settings.admin_car_wash_percentage));
    let dryclean_bonus = revenue
        .dryclean
        .saturating_mul(percent(settings.admin_dryclean_percentage));
    let personal_bonus = wash_bonus.saturating_add(dryclean_bonus);
    let percentage_earnings = cash_bonus.saturating_add(personal_bonus);

    let guarantee = apply_minimum_guarantee(
        percentage_earnings,
        settings.minimum_payment_admin,
        respect_minimum,
    );

    let mut reasoning = format!(
        "${} x {}% / {} admin(s) = ${}; own work bonus ${}; earnings ${}",
        total_revenue.normalize(),
        settings.admin_cash_percentage.normalize(),
        admin_count,
        cash_bonus.normalize(),
        personal_bonus.normalize(),
        percentage_earnings.normalize()
    );
    if guarantee.floor_applied {
        reasoning.push_str(&format!(
            ", below minimum ${}; paid ${}",
            guarantee.minimum_guaranteed.normalize(),
            guarantee.calculated_salary.normalize()
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "admin_salary".to_string(),
        rule_name: "Admin Salary".to_string(),
        employee_id: employee.id.clone(),
        input: serde_json::json!({
            "total_revenue": total_revenue.normalize().to_string(),
            "admin_count": admin_count,
            "admin_cash_percentage": settings.admin_cash_percentage.normalize().to_string(),
            "personal_wash_revenue": revenue.wash.normalize().to_string(),
            "personal_dryclean_revenue": revenue.dryclean.normalize().to_string(),
            "respect_minimum": respect_minimum
        }),
        output: serde_json::json!({
            "admin_cash_bonus": cash_bonus.normalize().to_string(),
            "admin_car_wash_bonus": personal_bonus.normalize().to_string(),
            "minimum_guaranteed": guarantee.minimum_guaranteed.normalize().to_string(),
            "floor_applied": guarantee.floor_applied,
            "calculated_salary": guarantee.calculated_salary.normalize().to_string()
        }),
        reasoning,
    };

    let salary = SalaryResult {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        role: EmployeeRole::Admin,
        total_personal_revenue: revenue.total(),
        calculated_salary: guarantee.calculated_salary,
        breakdown: SalaryBreakdown {
            washer_percentage: None,
            admin_cash_bonus: Some(cash_bonus),
            admin_car_wash_bonus: Some(personal_bonus),
            minimum_guaranteed: guarantee.minimum_guaranteed,
            final_amount: guarantee.calculated_salary,
        },
    };

    AdminSalaryResult { salary, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_settings() -> RateSettings {
        RateSettings {
            minimum_payment_washer: dec("1000"),
            minimum_payment_admin: dec("1500"),
            percentage_washer: dec("40"),
            percentage_washer_dryclean: dec("50"),
            admin_cash_percentage: dec("5"),
            admin_car_wash_percentage: dec("10"),
            admin_dryclean_percentage: dec("20"),
        }
    }

    fn create_admin() -> Employee {
        Employee {
            id: "a1".to_string(),
            name: "Olga".to_string(),
            role: Some(EmployeeRole::Admin),
        }
    }

    #[test]
    fn test_single_admin_takes_whole_cash_bonus() {
        let result = calculate_admin_salary(
            &create_admin(),
            &PersonalRevenue::default(),
            dec("40000"),
            1,
            &create_settings(),
            true,
            1,
        );

        assert_eq!(result.salary.breakdown.admin_cash_bonus, Some(dec("2000")));
        assert_eq!(result.salary.calculated_salary, dec("2000"));
        assert_eq!(result.salary.role, EmployeeRole::Admin);
    }

    #[test]
    fn test_two_admins_share_cash_bonus_and_hit_minimum() {
        let result = calculate_admin_salary(
            &create_admin(),
            &PersonalRevenue::default(),
            dec("40000"),
            2,
            &create_settings(),
            true,
            1,
        );

        assert_eq!(result.salary.breakdown.admin_cash_bonus, Some(dec("1000")));
        assert_eq!(result.salary.calculated_salary, dec("1500"));
        assert_eq!(result.salary.breakdown.minimum_guaranteed, dec("1500"));
    }

    #[test]
    fn test_zero_admin_count_keeps_bonus_undivided() {
        assert_eq!(admin_cash_bonus(dec("40000"), dec("5"), 0), dec("2000"));
    }

    #[test]
    fn test_own_work_adds_wash_and_dryclean_bonus() {
        let revenue = PersonalRevenue {
            wash: dec("10000"),
            dryclean: dec("5000"),
        };
        let result = calculate_admin_salary(
            &create_admin(),
            &revenue,
            dec("15000"),
            1,
            &create_settings(),
            true,
            1,
        );

        // cash 15000 * 5% = 750; wash 10000 * 10% = 1000; dryclean 5000 * 20% = 1000
        assert_eq!(result.salary.breakdown.admin_cash_bonus, Some(dec("750")));
        assert_eq!(result.salary.breakdown.admin_car_wash_bonus, Some(dec("2000")));
        assert_eq!(result.salary.calculated_salary, dec("2750"));
        assert_eq!(result.salary.total_personal_revenue, dec("15000"));
        assert_eq!(result.salary.breakdown.washer_percentage, None);
    }

    #[test]
    fn test_disabled_minimum_pays_exact_earnings() {
        let result = calculate_admin_salary(
            &create_admin(),
            &PersonalRevenue::default(),
            dec("40000"),
            2,
            &create_settings(),
            false,
            1,
        );

        assert_eq!(result.salary.calculated_salary, dec("1000"));
        assert_eq!(result.salary.breakdown.minimum_guaranteed, dec("0"));
    }

    #[test]
    fn test_audit_step_explains_share() {
        let result = calculate_admin_salary(
            &create_admin(),
            &PersonalRevenue::default(),
            dec("40000"),
            2,
            &create_settings(),
            true,
            3,
        );

        assert_eq!(result.audit_step.rule_id, "admin_salary");
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.input["admin_count"].as_u64().unwrap(), 2);
        assert_eq!(
            result.audit_step.output["admin_cash_bonus"].as_str().unwrap(),
            "1000"
        );
        assert!(result.audit_step.reasoning.contains("/ 2 admin(s)"));
        assert!(result.audit_step.reasoning.contains("below minimum $1500"));
    }
}
