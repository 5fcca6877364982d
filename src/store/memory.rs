//! In-process stores for exercising the services and handlers without MySQL.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::model::employee::{EmployeeInput, EmployeeRow};
use crate::model::visitor::{VisitorInput, VisitorRow};
use crate::store::{EmployeeStore, VisitorStore};

struct Table<R> {
    rows: Vec<R>,
    next_id: u64,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

#[derive(Default)]
pub struct MemoryEmployeeStore {
    table: Mutex<Table<EmployeeRow>>,
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> AppResult<Vec<EmployeeRow>> {
        let table = self.table.lock().unwrap();
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.num_emp.cmp(&a.num_emp));
        Ok(rows)
    }

    async fn insert(&self, input: &EmployeeInput) -> AppResult<EmployeeRow> {
        let mut table = self.table.lock().unwrap();
        let row = EmployeeRow {
            num_emp: table.next_id,
            nom: input.nom.clone(),
            salaire: input.salaire,
            created_at: Some(Utc::now()),
        };
        table.next_id += 1;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, num_emp: u64, input: &EmployeeInput) -> AppResult<Option<EmployeeRow>> {
        let mut table = self.table.lock().unwrap();
        Ok(table.rows.iter_mut().find(|r| r.num_emp == num_emp).map(|row| {
            row.nom = input.nom.clone();
            row.salaire = input.salaire;
            row.clone()
        }))
    }

    async fn delete(&self, num_emp: u64) -> AppResult<bool> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| r.num_emp != num_emp);
        Ok(table.rows.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryVisitorStore {
    table: Mutex<Table<VisitorRow>>,
}

impl MemoryVisitorStore {
    /// Overwrites the persisted total, simulating a drifted column.
    pub fn corrupt_total(&self, id: u64, total_amount: Decimal) {
        let mut table = self.table.lock().unwrap();
        if let Some(row) = table.rows.iter_mut().find(|r| r.id == id) {
            row.total_amount = total_amount;
        }
    }
}

#[async_trait]
impl VisitorStore for MemoryVisitorStore {
    async fn list(&self) -> AppResult<Vec<VisitorRow>> {
        let table = self.table.lock().unwrap();
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn insert(&self, input: &VisitorInput, total_amount: Decimal) -> AppResult<VisitorRow> {
        let mut table = self.table.lock().unwrap();
        let row = VisitorRow {
            id: table.next_id,
            name: input.name.clone(),
            days: input.days,
            daily_rate: input.daily_rate,
            total_amount,
            created_at: Some(Utc::now()),
        };
        table.next_id += 1;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: u64,
        input: &VisitorInput,
        total_amount: Decimal,
    ) -> AppResult<Option<VisitorRow>> {
        let mut table = self.table.lock().unwrap();
        Ok(table.rows.iter_mut().find(|r| r.id == id).map(|row| {
            row.name = input.name.clone();
            row.days = input.days;
            row.daily_rate = input.daily_rate;
            row.total_amount = total_amount;
            row.clone()
        }))
    }

    async fn delete(&self, id: u64) -> AppResult<bool> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() != before)
    }
}

/// Every call fails the way an unreachable database does.
pub struct UnavailableStore;

fn unavailable<T>() -> AppResult<T> {
    Err(AppError::Storage(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl EmployeeStore for UnavailableStore {
    async fn list(&self) -> AppResult<Vec<EmployeeRow>> {
        unavailable()
    }

    async fn insert(&self, _input: &EmployeeInput) -> AppResult<EmployeeRow> {
        unavailable()
    }

    async fn update(&self, _num_emp: u64, _input: &EmployeeInput) -> AppResult<Option<EmployeeRow>> {
        unavailable()
    }

    async fn delete(&self, _num_emp: u64) -> AppResult<bool> {
        unavailable()
    }
}

#[async_trait]
impl VisitorStore for UnavailableStore {
    async fn list(&self) -> AppResult<Vec<VisitorRow>> {
        unavailable()
    }

    async fn insert(&self, _input: &VisitorInput, _total: Decimal) -> AppResult<VisitorRow> {
        unavailable()
    }

    async fn update(
        &self,
        _id: u64,
        _input: &VisitorInput,
        _total: Decimal,
    ) -> AppResult<Option<VisitorRow>> {
        unavailable()
    }

    async fn delete(&self, _id: u64) -> AppResult<bool> {
        unavailable()
    }
}
