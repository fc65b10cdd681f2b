//! Washer salary calculation.
//!
//! Washers earn a commission on their personal revenue, with separate rates
//! for washes and dry-cleans, lifted to the washer minimum when it applies.

use rust_decimal::Decimal;

use crate::models::{
    AuditStep, Employee, EmployeeRole, RateSettings, SalaryBreakdown, SalaryResult, percent,
};

use super::minimum_guarantee::apply_minimum_guarantee;
use super::personal_revenue::PersonalRevenue;

/// The result of a washer salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct WasherSalaryResult {
    /// The washer's payroll outcome.
    pub salary: SalaryResult,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates a washer's salary from their personal revenue.
///
/// # Arguments
///
/// * `employee` - The washer being paid
/// * `revenue` - The washer's personal wash and dry-clean revenue
/// * `settings` - Commission rates and minimums in effect
/// * `respect_minimum` - Whether the washer minimum applies
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use detailing_payroll::calculation::{PersonalRevenue, calculate_washer_salary};
/// use detailing_payroll::models::{Employee, RateSettings};
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
/// let employee = Employee { id: "w1".to_string(), name: "Ivan".to_string(), role: None };
/// let revenue = PersonalRevenue { wash: Decimal::new(3000, 0), dryclean: Decimal::ZERO };
///
/// let result = calculate_washer_salary(&employee, &revenue, &settings, true, 1);
/// assert_eq!(result.salary.calculated_salary, Decimal::new(1200, 0));
/// ```
pub fn calculate_washer_salary(
    employee: &Employee,
    revenue: &PersonalRevenue,
    settings: &RateSettings,
    respect_minimum: bool,
    step_number: u32,
) -> WasherSalaryResult {
    let wash_commission = revenue.wash.saturating_mul(percent(settings.percentage_washer));
    let dryclean_commission = revenue
        .dryclean
        .saturating_mul(percent(settings.percentage_washer_dryclean));
    let percentage_earnings = wash_commission.saturating_add(dryclean_commission);

    let guarantee = apply_minimum_guarantee(
        percentage_earnings,
        settings.minimum_payment_washer,
        respect_minimum,
    );

    let reasoning = if guarantee.floor_applied {
        format!(
            "${} x {}% + ${} x {}% = ${}, below minimum ${}; paid ${}",
            revenue.wash.normalize(),
            settings.percentage_washer.normalize(),
            revenue.dryclean.normalize(),
            settings.percentage_washer_dryclean.normalize(),
            percentage_earnings.normalize(),
            guarantee.minimum_guaranteed.normalize(),
            guarantee.calculated_salary.normalize()
        )
    } else {
        format!(
            "${} x {}% + ${} x {}% = ${}",
            revenue.wash.normalize(),
            settings.percentage_washer.normalize(),
            revenue.dryclean.normalize(),
            settings.percentage_washer_dryclean.normalize(),
            percentage_earnings.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "washer_salary".to_string(),
        rule_name: "Washer Salary".to_string(),
        employee_id: employee.id.clone(),
        input: serde_json::json!({
            "personal_wash_revenue": revenue.wash.normalize().to_string(),
            "personal_dryclean_revenue": revenue.dryclean.normalize().to_string(),
            "percentage_washer": settings.percentage_washer.normalize().to_string(),
            "percentage_washer_dryclean": settings.percentage_washer_dryclean.normalize().to_string(),
            "respect_minimum": respect_minimum
        }),
        output: serde_json::json!({
            "percentage_earnings": percentage_earnings.normalize().to_string(),
            "minimum_guaranteed": guarantee.minimum_guaranteed.normalize().to_string(),
            "floor_applied": guarantee.floor_applied,
            "calculated_salary": guarantee.calculated_salary.normalize().to_string()
        }),
        reasoning,
    };

    let salary = SalaryResult {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        role: EmployeeRole::Washer,
        total_personal_revenue: revenue.total(),
        calculated_salary: guarantee.calculated_salary,
        breakdown: SalaryBreakdown {
            washer_percentage: Some(percentage_earnings),
            admin_cash_bonus: None,
            admin_car_wash_bonus: None,
            minimum_guaranteed: guarantee.minimum_guaranteed,
            final_amount: guarantee.calculated_salary,
        },
    };

    WasherSalaryResult { salary, audit_step }
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
            admin_dryclean_percentage: dec("10"),
        }
    }

    fn create_washer() -> Employee {
        Employee {
            id: "w1".to_string(),
            name: "Ivan".to_string(),
            role: None,
        }
    }

    fn revenue(wash: &str, dryclean: &str) -> PersonalRevenue {
        PersonalRevenue {
            wash: dec(wash),
            dryclean: dec(dryclean),
        }
    }

    #[test]
    fn test_commission_above_minimum() {
        let result =
            calculate_washer_salary(&create_washer(), &revenue("3000", "0"), &create_settings(), true, 1);

        assert_eq!(result.salary.calculated_salary, dec("1200"));
        assert_eq!(result.salary.breakdown.washer_percentage, Some(dec("1200")));
        assert_eq!(result.salary.breakdown.minimum_guaranteed, dec("1000"));
        assert_eq!(result.salary.breakdown.final_amount, dec("1200"));
        assert_eq!(result.salary.role, EmployeeRole::Washer);
    }

    #[test]
    fn test_commission_below_minimum_is_lifted() {
        let result =
            calculate_washer_salary(&create_washer(), &revenue("1000", "0"), &create_settings(), true, 1);

        assert_eq!(result.salary.calculated_salary, dec("1000"));
        assert_eq!(result.salary.breakdown.washer_percentage, Some(dec("400")));
        assert!(result.audit_step.reasoning.contains("below minimum"));
    }

    #[test]
    fn test_dryclean_uses_dryclean_rate() {
        let result =
            calculate_washer_salary(&create_washer(), &revenue("0", "10000"), &create_settings(), true, 1);

        assert_eq!(result.salary.calculated_salary, dec("5000"));
        assert_eq!(result.salary.total_personal_revenue, dec("10000"));
    }

    #[test]
    fn test_mixed_revenue_combines_both_commissions() {
        let result = calculate_washer_salary(
            &create_washer(),
            &revenue("2000", "2000"),
            &create_settings(),
            true,
            1,
        );

        // 2000 * 40% + 2000 * 50% = 800 + 1000
        assert_eq!(result.salary.calculated_salary, dec("1800"));
    }

    #[test]
    fn test_disabled_minimum_pays_exact_commission() {
        let result =
            calculate_washer_salary(&create_washer(), &revenue("1000", "0"), &create_settings(), false, 1);

        assert_eq!(result.salary.calculated_salary, dec("400"));
        assert_eq!(result.salary.breakdown.minimum_guaranteed, dec("0"));
    }

    #[test]
    fn test_no_revenue_pays_minimum() {
        let result =
            calculate_washer_salary(&create_washer(), &PersonalRevenue::default(), &create_settings(), true, 1);

        assert_eq!(result.salary.calculated_salary, dec("1000"));
        assert_eq!(result.salary.total_personal_revenue, dec("0"));
    }

    #[test]
    fn test_audit_step_records_inputs_and_outputs() {
        let result =
            calculate_washer_salary(&create_washer(), &revenue("3000", "0"), &create_settings(), true, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "washer_salary");
        assert_eq!(result.audit_step.employee_id, "w1");
        assert_eq!(
            result.audit_step.input["personal_wash_revenue"].as_str().unwrap(),
            "3000"
        );
        assert_eq!(
            result.audit_step.output["calculated_salary"].as_str().unwrap(),
            "1200"
        );
        assert_eq!(
            result.audit_step.output["floor_applied"].as_bool().unwrap(),
            false
        );
        assert!(result.audit_step.reasoning.contains("$3000 x 40%"));
    }
}
