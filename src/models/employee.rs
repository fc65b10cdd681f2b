//! Employee model and role types.
//!
//! This module defines the [`Employee`] struct, the [`EmployeeRole`] enum and
//! the [`RoleAssignment`] map handed to the salary calculator.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The role an employee works under for a computation.
///
/// Unknown role strings deserialize as [`EmployeeRole::Washer`], the role every
/// unlisted employee falls back to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Paid by commission on personally performed jobs.
    #[default]
    Washer,
    /// Paid by a share of total revenue plus commission on own jobs.
    Admin,
}

impl EmployeeRole {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Washer => "washer",
            EmployeeRole::Admin => "admin",
        }
    }
}

impl From<&str> for EmployeeRole {
    fn from(value: &str) -> Self {
        match value {
            "admin" => EmployeeRole::Admin,
            _ => EmployeeRole::Washer,
        }
    }
}

impl<'de> Deserialize<'de> for EmployeeRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(EmployeeRole::from(value.as_str()))
    }
}

/// An employee known to the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name used on payroll results.
    pub name: String,
    /// The employee's general role, used when no daily role is recorded.
    #[serde(default)]
    pub role: Option<EmployeeRole>,
}

impl Employee {
    /// Returns the general role, defaulting to washer.
    pub fn default_role(&self) -> EmployeeRole {
        self.role.unwrap_or_default()
    }
}

/// Roles assigned to employees for one computation.
///
/// Employees missing from the map are washers. Ids are kept ordered so that
/// iteration is deterministic.
///
/// # Example
///
/// ```
/// use detailing_payroll::models::{EmployeeRole, RoleAssignment};
///
/// let mut roles = RoleAssignment::new();
/// roles.assign("a1", EmployeeRole::Admin);
///
/// assert_eq!(roles.role_of("a1"), EmployeeRole::Admin);
/// assert_eq!(roles.role_of("nobody"), EmployeeRole::Washer);
/// assert_eq!(roles.admin_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAssignment(BTreeMap<String, EmployeeRole>);

impl RoleAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a role to an employee, replacing any previous one.
    pub fn assign(&mut self, employee_id: impl Into<String>, role: EmployeeRole) {
        self.0.insert(employee_id.into(), role);
    }

    /// Returns the assigned role, or washer when the employee is unlisted.
    pub fn role_of(&self, employee_id: &str) -> EmployeeRole {
        self.0.get(employee_id).copied().unwrap_or_default()
    }

    /// Number of employees assigned the admin role.
    ///
    /// This counts map entries, so an admin who did no work still takes a
    /// share of the cash bonus.
    pub fn admin_count(&self) -> usize {
        self.0
            .values()
            .filter(|role| **role == EmployeeRole::Admin)
            .count()
    }

    /// Iterates over assigned employee ids in ascending order.
    pub fn employee_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns true if no roles are assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, EmployeeRole)> for RoleAssignment {
    fn from_iter<I: IntoIterator<Item = (K, EmployeeRole)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, role)| (id.into(), role)).collect())
    }
}
