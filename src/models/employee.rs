use serde::{Deserialize, Serialize};

use super::{Department, Entity};

/// A person employed in (at most) one department.
///
/// The department link is a plain foreign key. Use
/// [`EmployeeWithDepartment`] when the department row itself is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub role: String,
    /// Non-negative by convention; not checked.
    #[serde(default)]
    pub salary: f64,
    /// References `department.id`. Cleared by the store when the department is deleted.
    #[serde(default)]
    pub department_id: Option<i64>,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
        department_id: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
            salary,
            department_id,
        }
    }
}

impl Entity for Employee {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// An employee joined with its department, used for detailed responses.
///
/// The `employee` fields are flattened into the JSON response, with an
/// additional `department` object (or `null` when unassigned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWithDepartment {
    #[serde(flatten)]
    pub employee: Employee,
    pub department: Option<Department>,
}
