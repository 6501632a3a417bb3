mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::{Database, SqliteDepartmentRepository, SqliteEmployeeRepository};
use crate::service::{DepartmentService, EmployeeService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub departments: DepartmentService<SqliteDepartmentRepository>,
    pub employees: EmployeeService<SqliteEmployeeRepository>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            departments: DepartmentService::new(SqliteDepartmentRepository::new(db.clone())),
            employees: EmployeeService::new(SqliteEmployeeRepository::new(db)),
        }
    }
}

pub fn create_router(db: Database) -> Router {
    let api = Router::new()
        // Departments
        .route("/departments", get(handlers::list_departments))
        .route("/departments", post(handlers::create_department))
        .route("/departments/{id}", get(handlers::get_department))
        .route("/departments/{id}", put(handlers::update_department))
        .route("/departments/{id}", delete(handlers::delete_department))
        .route(
            "/departments/{id}/employees",
            get(handlers::list_department_employees),
        )
        // Employees
        .route("/employees", get(handlers::list_employees))
        .route("/employees", post(handlers::create_employee))
        .route(
            "/employees/salary-range",
            get(handlers::list_employees_by_salary),
        )
        .route("/employees/{id}", get(handlers::get_employee))
        .route("/employees/{id}", put(handlers::update_employee))
        .route("/employees/{id}", delete(handlers::delete_employee))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState::new(db))
}
