//! Persistence contracts.
//!
//! Services depend on these traits only. The SQLite implementations live in
//! [`crate::db`].

use crate::error::StoreResult;
use crate::models::{Employee, EmployeeWithDepartment, Entity};

/// CRUD access to one entity type.
pub trait Repository<E: Entity> {
    /// Every persisted row, in insertion order.
    fn find_all(&self) -> StoreResult<Vec<E>>;

    fn find_by_id(&self, id: E::Id) -> StoreResult<Option<E>>;

    /// Inserts the entity under a fresh id when it has none, otherwise
    /// overwrites the row with that id. Returns the entity as persisted.
    fn save(&self, entity: &E) -> StoreResult<E>;

    /// Overwrites the row stored under `id` with the entity's fields, in a
    /// single statement. Returns `None` and writes nothing if no such row exists.
    fn update(&self, id: E::Id, entity: &E) -> StoreResult<Option<E>>;

    /// Removes the row if present. Deleting an absent id is not an error.
    fn delete_by_id(&self, id: E::Id) -> StoreResult<()>;

    fn delete(&self, entity: &E) -> StoreResult<()> {
        match entity.id() {
            Some(id) => self.delete_by_id(id),
            None => Ok(()),
        }
    }
}

/// Employee-specific queries on top of plain CRUD.
pub trait EmployeeRepository: Repository<Employee> {
    /// Employees with `min <= salary <= max`. Empty when `min > max`.
    fn find_by_salary_between(&self, min: f64, max: f64) -> StoreResult<Vec<Employee>>;

    fn find_by_department(&self, department_id: i64) -> StoreResult<Vec<Employee>>;

    fn find_all_with_department(&self) -> StoreResult<Vec<EmployeeWithDepartment>>;

    fn find_by_id_with_department(&self, id: i64) -> StoreResult<Option<EmployeeWithDepartment>>;
}
