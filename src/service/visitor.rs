use std::sync::Arc;

use tracing::{debug, error, info};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::model::visitor::{Visitor, VisitorInput, VisitorStatistics};
use crate::store::VisitorStore;

/// Visitor records; `totalAmount` is written on save and recomputed from
/// `days` and `dailyRate` whenever a record is returned.
#[derive(Clone)]
pub struct VisitorService {
    store: Arc<dyn VisitorStore>,
}

impl VisitorService {
    pub fn new(store: Arc<dyn VisitorStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        let rows = self.store.list().await.inspect_err(|e| {
            error!(error = %e, "Failed to list visitors");
        })?;
        debug!(count = rows.len(), "Listed visitors");

        Ok(rows.into_iter().map(Visitor::from).collect())
    }

    pub async fn create(&self, input: VisitorInput) -> AppResult<Visitor> {
        input.validate()?;
        let input = input.normalized();
        let total_amount = input.total_amount();

        let row = self
            .store
            .insert(&input, total_amount)
            .await
            .inspect_err(|e| {
                error!(error = %e, name = %input.name, "Failed to create visitor");
            })?;
        info!(id = row.id, %total_amount, "Visitor created");

        Ok(row.into())
    }

    pub async fn update(&self, id: u64, input: VisitorInput) -> AppResult<Visitor> {
        input.validate()?;
        let input = input.normalized();
        let total_amount = input.total_amount();

        let row = self
            .store
            .update(id, &input, total_amount)
            .await
            .inspect_err(|e| {
                error!(error = %e, id, "Failed to update visitor");
            })?;

        match row {
            Some(row) => {
                info!(id, %total_amount, "Visitor updated");
                Ok(row.into())
            }
            None => Err(AppError::not_found("Visitor", id)),
        }
    }

    pub async fn delete(&self, id: u64) -> AppResult<()> {
        let removed = self.store.delete(id).await.inspect_err(|e| {
            error!(error = %e, id, "Failed to delete visitor");
        })?;
        debug!(id, removed, "Visitor delete");
        Ok(())
    }

    pub async fn statistics(&self) -> AppResult<VisitorStatistics> {
        let visitors = self.list().await?;
        Ok(VisitorStatistics::from_records(&visitors))
    }
}
