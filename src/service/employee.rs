use std::sync::Arc;

use tracing::{debug, error, info};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::model::employee::{Employee, EmployeeInput, EmployeeStatistics};
use crate::store::EmployeeStore;

/// Employee records with `observation` derived on every read and write.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        let rows = self.store.list().await.inspect_err(|e| {
            error!(error = %e, "Failed to list employees");
        })?;
        debug!(count = rows.len(), "Listed employees");

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    pub async fn create(&self, input: EmployeeInput) -> AppResult<Employee> {
        input.validate()?;
        let input = input.normalized();

        let row = self.store.insert(&input).await.inspect_err(|e| {
            error!(error = %e, nom = %input.nom, "Failed to create employee");
        })?;
        info!(num_emp = row.num_emp, "Employee created");

        Ok(row.into())
    }

    pub async fn update(&self, num_emp: u64, input: EmployeeInput) -> AppResult<Employee> {
        input.validate()?;
        let input = input.normalized();

        let row = self.store.update(num_emp, &input).await.inspect_err(|e| {
            error!(error = %e, num_emp, "Failed to update employee");
        })?;

        match row {
            Some(row) => {
                info!(num_emp, "Employee updated");
                Ok(row.into())
            }
            None => Err(AppError::not_found("Employee", num_emp)),
        }
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete(&self, num_emp: u64) -> AppResult<()> {
        let removed = self.store.delete(num_emp).await.inspect_err(|e| {
            error!(error = %e, num_emp, "Failed to delete employee");
        })?;
        debug!(num_emp, removed, "Employee delete");
        Ok(())
    }

    pub async fn statistics(&self) -> AppResult<EmployeeStatistics> {
        let employees = self.list().await?;
        Ok(EmployeeStatistics::from_records(&employees))
    }
}
