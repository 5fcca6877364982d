//! Record stores: one table per entity.
//!
//! Every call checks out a single pooled connection, runs its statements on
//! it and hands it back when the guard drops, on success and failure alike.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::AppResult;
use crate::model::employee::{EmployeeInput, EmployeeRow};
use crate::model::visitor::{VisitorInput, VisitorRow};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::{MySqlEmployeeStore, MySqlVisitorStore};

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All rows, newest first.
    async fn list(&self) -> AppResult<Vec<EmployeeRow>>;

    /// Inserts and reads the new row back.
    async fn insert(&self, input: &EmployeeInput) -> AppResult<EmployeeRow>;

    /// `None` when no row has this id.
    async fn update(&self, num_emp: u64, input: &EmployeeInput) -> AppResult<Option<EmployeeRow>>;

    /// Returns whether a row was removed.
    async fn delete(&self, num_emp: u64) -> AppResult<bool>;
}

#[async_trait]
pub trait VisitorStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<VisitorRow>>;

    async fn insert(&self, input: &VisitorInput, total_amount: Decimal) -> AppResult<VisitorRow>;

    async fn update(
        &self,
        id: u64,
        input: &VisitorInput,
        total_amount: Decimal,
    ) -> AppResult<Option<VisitorRow>>;

    async fn delete(&self, id: u64) -> AppResult<bool>;
}
