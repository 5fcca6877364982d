pub mod employee;
pub mod visitor;

pub use employee::EmployeeService;
pub use visitor::VisitorService;
