use crate::error::StoreResult;
use crate::models::Department;
use crate::repository::Repository;

#[derive(Clone)]
pub struct DepartmentService<R> {
    repo: R,
}

impl<R: Repository<Department>> DepartmentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> StoreResult<Vec<Department>> {
        self.repo.find_all()
    }

    /// `None` when no department has this id; the caller picks the response.
    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Department>> {
        self.repo.find_by_id(id)
    }

    pub fn add(&self, department: Department) -> StoreResult<Department> {
        self.repo.save(&department)
    }

    /// Replaces the department stored under `id`, keeping that id.
    /// Returns `None` without writing if there is no such department.
    pub fn update(&self, id: i64, department: Department) -> StoreResult<Option<Department>> {
        self.repo.update(id, &department)
    }

    pub fn delete(&self, id: i64) -> StoreResult<()> {
        self.repo.delete_by_id(id)
    }
}
