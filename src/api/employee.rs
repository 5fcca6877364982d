use actix_web::{HttpResponse, Responder, web};

use crate::error::{AppResult, MessageResponse};
use crate::model::employee::EmployeeInput;
use crate::service::EmployeeService;

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = [Employee]),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(service: web::Data<EmployeeService>) -> AppResult<impl Responder> {
    let employees = service.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid name or salary", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeeInput>,
) -> AppResult<impl Responder> {
    let employee = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{numEmp}",
    params(
        ("numEmp" = u64, Path, description = "Employee number")
    ),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid name or salary", body = MessageResponse),
        (status = 404, description = "Employee not found", body = MessageResponse, example = json!({
            "message": "Employee 42 not found"
        })),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
    payload: web::Json<EmployeeInput>,
) -> AppResult<impl Responder> {
    let num_emp = path.into_inner();
    let employee = service.update(num_emp, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{numEmp}",
    params(
        ("numEmp" = u64, Path, description = "Employee number")
    ),
    responses(
        (status = 200, description = "Deleted, or already absent", body = MessageResponse, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> AppResult<impl Responder> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Employee deleted successfully")))
}

/// Salary statistics
#[utoipa::path(
    get,
    path = "/api/employees/statistics",
    responses(
        (status = 200, description = "Payroll summary", body = EmployeeStatistics),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn employee_statistics(service: web::Data<EmployeeService>) -> AppResult<impl Responder> {
    let stats = service.statistics().await?;
    Ok(HttpResponse::Ok().json(stats))
}
