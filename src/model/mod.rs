pub mod derived;
pub mod employee;
pub mod validation;
pub mod visitor;
