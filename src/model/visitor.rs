use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::derived::{compute_total, round_money};
use crate::model::validation::{validate_money, validate_name};

/// Row of the `visitors` table. `total_amount` is written on every save but
/// never read back as authoritative.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VisitorRow {
    pub id: u64,
    pub name: String,
    #[sqlx(try_from = "u64")]
    pub days: u32,
    pub daily_rate: Decimal,
    pub total_amount: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "name": "Bob",
        "days": 5,
        "dailyRate": 20.0,
        "totalAmount": 100.0,
        "createdAt": "2026-01-01T09:30:00Z"
    })
)]
pub struct Visitor {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Bob")]
    pub name: String,

    #[schema(example = 5)]
    pub days: u32,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 20.0, value_type = f64)]
    pub daily_rate: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 100.0, value_type = f64)]
    pub total_amount: Decimal,

    #[schema(example = "2026-01-01T09:30:00Z", format = "date-time", value_type = Option<String>)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<VisitorRow> for Visitor {
    fn from(row: VisitorRow) -> Self {
        Self {
            total_amount: compute_total(row.days, row.daily_rate),
            id: row.id,
            name: row.name,
            days: row.days,
            daily_rate: row.daily_rate,
            created_at: row.created_at,
        }
    }
}

/// Body of `POST /visitors` and `PUT /visitors/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorInput {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Bob")]
    pub name: String,

    #[validate(range(min = 1, max = 10_000))]
    #[schema(example = 5)]
    pub days: u32,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_money"))]
    #[schema(example = 20.0, value_type = f64)]
    pub daily_rate: Decimal,
}

impl VisitorInput {
    pub fn new(name: impl Into<String>, days: u32, daily_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            days,
            daily_rate,
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            days: self.days,
            daily_rate: round_money(self.daily_rate),
        }
    }

    pub fn total_amount(&self) -> Decimal {
        compute_total(self.days, self.daily_rate)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorStatistics {
    #[schema(example = 2)]
    pub total_visitors: usize,
    #[schema(example = 8)]
    pub total_days: u64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 249.97, value_type = f64)]
    pub total_amount: Decimal,
}

impl VisitorStatistics {
    pub fn from_records(visitors: &[Visitor]) -> Self {
        visitors.iter().fold(Self::default(), |mut stats, visitor| {
            stats.total_visitors += 1;
            stats.total_days += u64::from(visitor.days);
            stats.total_amount += compute_total(visitor.days, visitor.daily_rate);
            stats
        })
    }
}
