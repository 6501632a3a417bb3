//! Domain models for the department/employee store.
//!
//! - [`Department`]: an organisational unit with a name.
//! - [`Employee`]: a person with a role and salary, optionally linked to one
//!   department through `department_id`.
//! - [`EmployeeWithDepartment`]: read view produced by joining the two tables.
//!
//! Instances are transient copies of persisted rows. The store owns the rows.

mod department;
mod employee;

pub use department::*;
pub use employee::*;

/// A persisted record with a store-assigned identifier.
pub trait Entity {
    type Id: Copy;

    /// The identifier, or `None` if the entity has never been saved.
    fn id(&self) -> Option<Self::Id>;
}
