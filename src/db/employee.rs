use rusqlite::Row;

use super::Database;
use crate::error::StoreResult;
use crate::models::{Department, Employee, EmployeeWithDepartment};
use crate::repository::{EmployeeRepository, Repository};

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, role, salary, department_id FROM employee";

// Department columns come after the five employee columns.
const EMPLOYEE_JOIN_SQL: &str = "SELECT e.id, e.name, e.role, e.salary, e.department_id, d.id, d.name
     FROM employee e
     LEFT JOIN department d ON d.id = e.department_id";

/// SQLite-backed employee repository.
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    db: Database,
}

impl SqliteEmployeeRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn query_employees(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> StoreResult<Vec<Employee>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(sql)?;

        let employees = stmt
            .query_map(params, parse_employee_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }
}

impl Repository<Employee> for SqliteEmployeeRepository {
    fn find_all(&self) -> StoreResult<Vec<Employee>> {
        self.query_employees(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id"), [])
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<Employee>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(parse_employee_row(row)?))
        } else {
            Ok(None)
        }
    }

    fn save(&self, employee: &Employee) -> StoreResult<Employee> {
        let conn = self.db.conn();

        conn.execute(
            "INSERT INTO employee (id, name, role, salary, department_id) VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                role = excluded.role,
                salary = excluded.salary,
                department_id = excluded.department_id",
            (
                employee.id,
                &employee.name,
                &employee.role,
                employee.salary,
                employee.department_id,
            ),
        )?;

        let id = employee.id.unwrap_or_else(|| conn.last_insert_rowid());
        tracing::debug!(id, department_id = ?employee.department_id, "Saved employee");

        Ok(Employee {
            id: Some(id),
            ..employee.clone()
        })
    }

    fn update(&self, id: i64, employee: &Employee) -> StoreResult<Option<Employee>> {
        let conn = self.db.conn();
        let rows = conn.execute(
            "UPDATE employee SET name = ?, role = ?, salary = ?, department_id = ? WHERE id = ?",
            (
                &employee.name,
                &employee.role,
                employee.salary,
                employee.department_id,
                id,
            ),
        )?;

        if rows == 0 {
            return Ok(None);
        }
        tracing::debug!(id, department_id = ?employee.department_id, "Updated employee");

        Ok(Some(Employee {
            id: Some(id),
            ..employee.clone()
        }))
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let conn = self.db.conn();
        let rows = conn.execute("DELETE FROM employee WHERE id = ?", [id])?;
        tracing::debug!(id, rows, "Deleted employee");
        Ok(())
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn find_by_salary_between(&self, min: f64, max: f64) -> StoreResult<Vec<Employee>> {
        self.query_employees(
            &format!("{EMPLOYEE_SELECT_SQL} WHERE salary BETWEEN ? AND ? ORDER BY id"),
            (min, max),
        )
    }

    fn find_by_department(&self, department_id: i64) -> StoreResult<Vec<Employee>> {
        self.query_employees(
            &format!("{EMPLOYEE_SELECT_SQL} WHERE department_id = ? ORDER BY id"),
            [department_id],
        )
    }

    fn find_all_with_department(&self) -> StoreResult<Vec<EmployeeWithDepartment>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_JOIN_SQL} ORDER BY e.id"))?;

        let employees = stmt
            .query_map([], parse_joined_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    fn find_by_id_with_department(&self, id: i64) -> StoreResult<Option<EmployeeWithDepartment>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_JOIN_SQL} WHERE e.id = ?"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(parse_joined_row(row)?))
        } else {
            Ok(None)
        }
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        role: row.get(2)?,
        salary: row.get(3)?,
        department_id: row.get(4)?,
    })
}

fn parse_joined_row(row: &Row<'_>) -> rusqlite::Result<EmployeeWithDepartment> {
    let department = match row.get::<_, Option<i64>>(5)? {
        Some(id) => Some(Department {
            id: Some(id),
            name: row.get(6)?,
        }),
        None => None,
    };

    Ok(EmployeeWithDepartment {
        employee: parse_employee_row(row)?,
        department,
    })
}
