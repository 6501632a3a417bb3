//! Use-case services sitting between the HTTP boundary and the store.
//!
//! Services receive their repository at construction and forward to it.
//! Store errors pass through unchanged; a missing row is reported as `None`.

mod department;
mod employee;

pub use department::DepartmentService;
pub use employee::EmployeeService;
