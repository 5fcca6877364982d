use crate::error::MessageResponse;
use crate::model::derived::Observation;
use crate::model::employee::{
    Employee, EmployeeInput, EmployeeStatistics, ObservationDistribution,
};
use crate::model::visitor::{Visitor, VisitorInput, VisitorStatistics};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staffdesk API",
        version = "0.1.0",
        description = r#"
## Employee & Visitor Records

Plain CRUD over two record types, each with a server-computed field:

- **Employees** (`nom`, `salaire`): `observation` is `mediocre` below 1000,
  `moyen` from 1000 to 5000 inclusive, `grand` above 5000.
- **Visitors** (`name`, `days`, `dailyRate`): `totalAmount` is `days * dailyRate`.

Derived fields sent by a client are ignored.

### Errors
Every error body is `{ "message": "..." }`:
`400` invalid input, `404` unknown id on update, `500` storage failure.
Deleting an unknown id succeeds.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::employee_statistics,

        crate::api::visitor::list_visitors,
        crate::api::visitor::create_visitor,
        crate::api::visitor::update_visitor,
        crate::api::visitor::delete_visitor,
        crate::api::visitor::visitor_statistics
    ),
    components(
        schemas(
            Employee,
            EmployeeInput,
            EmployeeStatistics,
            Observation,
            ObservationDistribution,
            Visitor,
            VisitorInput,
            VisitorStatistics,
            MessageResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee records"),
        (name = "Visitor", description = "Visitor records"),
    )
)]
pub struct ApiDoc;
