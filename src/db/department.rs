use rusqlite::Row;

use super::Database;
use crate::error::StoreResult;
use crate::models::Department;
use crate::repository::Repository;

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name FROM department";

/// SQLite-backed department repository.
#[derive(Clone)]
pub struct SqliteDepartmentRepository {
    db: Database,
}

impl SqliteDepartmentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Repository<Department> for SqliteDepartmentRepository {
    fn find_all(&self) -> StoreResult<Vec<Department>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id"))?;

        let departments = stmt
            .query_map([], parse_department_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(departments)
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<Department>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(parse_department_row(row)?))
        } else {
            Ok(None)
        }
    }

    fn save(&self, department: &Department) -> StoreResult<Department> {
        let conn = self.db.conn();

        // A NULL id lets SQLite allocate the next one.
        conn.execute(
            "INSERT INTO department (id, name) VALUES (?, ?)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name",
            (department.id, &department.name),
        )?;

        let id = department.id.unwrap_or_else(|| conn.last_insert_rowid());
        tracing::debug!(id, "Saved department");

        Ok(Department {
            id: Some(id),
            name: department.name.clone(),
        })
    }

    fn update(&self, id: i64, department: &Department) -> StoreResult<Option<Department>> {
        let conn = self.db.conn();
        let rows = conn.execute(
            "UPDATE department SET name = ? WHERE id = ?",
            (&department.name, id),
        )?;

        if rows == 0 {
            return Ok(None);
        }
        tracing::debug!(id, "Updated department");

        Ok(Some(Department {
            id: Some(id),
            name: department.name.clone(),
        }))
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let conn = self.db.conn();
        let rows = conn.execute("DELETE FROM department WHERE id = ?", [id])?;
        tracing::debug!(id, rows, "Deleted department");
        Ok(())
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: Some(row.get(0)?),
        name: row.get(1)?,
    })
}
