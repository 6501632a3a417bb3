use crate::error::StoreResult;
use crate::models::{Employee, EmployeeWithDepartment};
use crate::repository::EmployeeRepository;

#[derive(Clone)]
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> StoreResult<Vec<Employee>> {
        self.repo.find_all()
    }

    pub fn get_all_with_department(&self) -> StoreResult<Vec<EmployeeWithDepartment>> {
        self.repo.find_all_with_department()
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Employee>> {
        self.repo.find_by_id(id)
    }

    pub fn get_by_id_with_department(&self, id: i64) -> StoreResult<Option<EmployeeWithDepartment>> {
        self.repo.find_by_id_with_department(id)
    }

    pub fn get_by_department(&self, department_id: i64) -> StoreResult<Vec<Employee>> {
        self.repo.find_by_department(department_id)
    }

    /// Fails with a constraint violation if `department_id` names no department.
    pub fn add(&self, employee: Employee) -> StoreResult<Employee> {
        self.repo.save(&employee)
    }

    pub fn update(&self, id: i64, employee: Employee) -> StoreResult<Option<Employee>> {
        self.repo.update(id, &employee)
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.repo.delete_by_id(id)
    }

    /// Inclusive on both ends. `min > max` is not rejected; it just matches nothing.
    pub fn get_by_salary_range(&self, min: f64, max: f64) -> StoreResult<Vec<Employee>> {
        self.repo.find_by_salary_between(min, max)
    }
}
